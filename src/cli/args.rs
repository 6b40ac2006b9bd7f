// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// msglint - commit-msg hook
///
/// Checks the commit message git is about to record, wraps long lines and
/// rejects messages that break the subject-line conventions.
#[derive(Parser, Debug)]
#[command(name = "msglint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate and reformat a commit message from a commit-msg hook", long_about = None)]
pub struct Cli {
    /// Path to the commit message file (passed by git)
    pub message_file: PathBuf,
}
