// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine: ordering and sequential execution of rules.

use crate::commit::CommitMessage;
use crate::config::LintConfig;
use crate::error::{RegistryError, Result};
use crate::report::Reporter;
use std::collections::HashSet;

use super::builtin::{RuleEntry, Verdict, BUILTIN_RULES};
use super::outcome::Outcome;

/// Final state of a message after every rule has run.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The message after all rewrites.
    pub message: CommitMessage,
    /// Per-rule results.
    pub outcome: Outcome,
    /// Whether any rule changed the message text.
    pub rewritten: bool,
}

impl LintReport {
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }
}

/// Runs an ordered set of rules over a commit message.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: LintConfig,
    rules: Vec<RuleEntry>,
}

impl RuleEngine {
    /// Create an engine running the built-in rules.
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            rules: sorted(BUILTIN_RULES.to_vec()),
        }
    }

    /// Create an engine running the given rules.
    ///
    /// Rule names must be unique and non-empty.
    pub fn with_rules(
        config: LintConfig,
        rules: Vec<RuleEntry>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.name.is_empty() {
                return Err(RegistryError::EmptyName.into());
            }
            if !seen.insert(rule.name) {
                return Err(RegistryError::DuplicateRule {
                    name: rule.name.to_string(),
                }
                .into());
            }
        }

        Ok(Self {
            config,
            rules: sorted(rules),
        })
    }

    /// Rules in execution order.
    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    /// Run every rule in order, feeding each the previous rule's output.
    ///
    /// A rejection does not stop later rules.
    pub fn run(&self, message: CommitMessage, reporter: &mut dyn Reporter) -> LintReport {
        let original = message.clone();
        let mut current = message;
        let mut outcome = Outcome::new();

        for rule in &self.rules {
            let verdict = (rule.apply)(&current, &self.config, reporter);
            let accepted = verdict.is_accepted();
            tracing::debug!(rule = rule.name, tier = rule.tier, accepted, "Rule finished");

            outcome.record(rule.name, accepted);
            if let Verdict::Rewritten(next) = verdict {
                current = next;
            }
        }

        if !outcome.is_accepted() {
            tracing::debug!("Rejected by: {}", outcome.failed_rules().join(", "));
        }

        let rewritten = current != original;
        LintReport {
            message: current,
            outcome,
            rewritten,
        }
    }
}

/// Stable sort by tier, keeping registration order within a tier.
fn sorted(mut rules: Vec<RuleEntry>) -> Vec<RuleEntry> {
    rules.sort_by_key(|r| r.tier);
    rules
}
