// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for msglint.
//!
//! Rule failures are not errors: they are reported as diagnostics and folded
//! into the lint outcome. The types here cover the conditions that abort a
//! hook run outright.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for msglint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Message file errors
    #[error("Failed to read commit message '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write commit message '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Rule registration errors
    #[error("Rule registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl LintError {
    /// Process exit status used when this error aborts the hook.
    ///
    /// Kept apart from the rejection status so callers can tell a broken
    /// hook from a rejected message.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors raised while assembling a rule set.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate rule name: {name}")]
    DuplicateRule { name: String },

    #[error("Rule name must not be empty")]
    EmptyName,
}

/// Result type alias for msglint operations.
pub type Result<T> = std::result::Result<T, LintError>;
