// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! msglint - commit-msg hook
//!
//! Validates a commit message against a fixed set of rules and reformats it
//! in place.
//!
//! # Rules
//!
//! - Subject starts with an uppercase letter (`fixup!` subjects exempt)
//! - Subject is at most 50 characters and does not end with a period
//! - Subject is separated from the body by a blank line
//! - Subject does not start with an issue key such as `ABC-123`
//! - Subject uses imperative mood (warning only)
//! - Lines are wrapped at 72 characters
//!
//! # Example
//!
//! ```
//! use msglint::commit::CommitMessage;
//! use msglint::config::LintConfig;
//! use msglint::report::MemoryReporter;
//! use msglint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(LintConfig::default());
//! let mut reporter = MemoryReporter::new();
//! let report = engine.run(CommitMessage::new("Fix bug.\n"), &mut reporter);
//!
//! assert!(!report.is_accepted());
//! assert_eq!(reporter.diagnostics.len(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod hooks;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use error::{LintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of msglint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            _ => VERSION.to_string(),
        }
    }
}
