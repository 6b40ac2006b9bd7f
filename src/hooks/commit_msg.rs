// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The `commit-msg` hook: read, lint, write back.

use crate::commit::CommitMessage;
use crate::config::LintConfig;
use crate::error::{LintError, Result};
use crate::report::Reporter;
use crate::rules::RuleEngine;
use std::fs;
use std::path::{Path, PathBuf};

/// File git leaves next to the message file while a merge is in progress.
pub const MERGE_MSG_FILE: &str = "MERGE_MSG";

/// What the hook did with a message file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// A merge is in progress; nothing was checked.
    SkippedMerge,
    /// The message is empty and git will abort the commit itself.
    SkippedEmpty,
    /// The rules ran and the final message was written back.
    Checked { accepted: bool, rewritten: bool },
}

impl HookOutcome {
    /// Whether git should go ahead with the commit.
    pub fn is_success(&self) -> bool {
        match self {
            HookOutcome::SkippedMerge | HookOutcome::SkippedEmpty => true,
            HookOutcome::Checked { accepted, .. } => *accepted,
        }
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Path of the `MERGE_MSG` file next to the given message file.
pub fn merge_msg_path(message_file: &Path) -> PathBuf {
    message_file
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(MERGE_MSG_FILE)
}

/// Runs the rule engine against a commit message file.
#[derive(Debug, Clone)]
pub struct CommitMsgHook {
    engine: RuleEngine,
}

impl CommitMsgHook {
    /// Create a hook running the built-in rules.
    pub fn new(config: LintConfig) -> Self {
        Self::with_engine(RuleEngine::new(config))
    }

    /// Create a hook around an existing engine.
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self { engine }
    }

    /// Lint the message at `path`.
    ///
    /// Unless a merge is in progress or the message is empty, the file is
    /// overwritten with the final message whether or not it was accepted.
    pub fn run(&self, path: &Path, reporter: &mut dyn Reporter) -> Result<HookOutcome> {
        if merge_msg_path(path).exists() {
            tracing::debug!("Merge in progress, skipping {:?}", path);
            return Ok(HookOutcome::SkippedMerge);
        }

        let message = read_message(path)?;
        if message.is_empty_commit() {
            tracing::debug!("Empty commit message, leaving it to git");
            return Ok(HookOutcome::SkippedEmpty);
        }

        let report = self.engine.run(message, reporter);
        write_message(path, &report.message)?;

        Ok(HookOutcome::Checked {
            accepted: report.is_accepted(),
            rewritten: report.rewritten,
        })
    }
}

fn read_message(path: &Path) -> Result<CommitMessage> {
    tracing::debug!("Reading commit message from {:?}", path);
    fs::read_to_string(path)
        .map(CommitMessage::new)
        .map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn write_message(path: &Path, message: &CommitMessage) -> Result<()> {
    tracing::debug!("Writing commit message to {:?}", path);
    fs::write(path, message.as_str()).map_err(|source| LintError::Write {
        path: path.to_path_buf(),
        source,
    })
}
