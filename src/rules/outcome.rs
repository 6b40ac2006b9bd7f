// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Aggregation of per-rule results.

/// Result of one rule execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub accepted: bool,
}

/// Accumulated rule results for one message.
///
/// The message is accepted only if every rule accepted it. An empty outcome
/// is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    results: Vec<RuleOutcome>,
}

impl Outcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of one rule.
    pub fn record(&mut self, rule: &'static str, accepted: bool) {
        self.results.push(RuleOutcome { rule, accepted });
    }

    /// Logical AND over all recorded results.
    pub fn is_accepted(&self) -> bool {
        self.results.iter().all(|r| r.accepted)
    }

    /// Names of the rules that rejected the message, in execution order.
    pub fn failed_rules(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|r| !r.accepted)
            .map(|r| r.rule)
            .collect()
    }

    /// All recorded results, in execution order.
    pub fn results(&self) -> &[RuleOutcome] {
        &self.results
    }
}
