// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message text and the line views rules inspect.

use crate::config::LintConfig;

/// A commit message as written to the message file.
///
/// The text is kept verbatim; rules read it through the accessors below and
/// replace it wholesale when they rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitMessage {
    text: String,
}

impl CommitMessage {
    /// Create a commit message from raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Rebuild a message from individual lines joined with `\n`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }

    /// The raw message text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether git will abort this commit on its own.
    ///
    /// True for an empty message and for one whose first line is empty.
    pub fn is_empty_commit(&self) -> bool {
        self.text.is_empty() || self.text.starts_with('\n')
    }

    /// Lines split on `\n`, untouched.
    pub fn raw_lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// The subject line with surrounding whitespace removed.
    pub fn subject(&self) -> &str {
        self.raw_lines().next().unwrap_or("").trim()
    }

    /// First whitespace-separated word of the subject, if any.
    pub fn first_word(&self) -> Option<&str> {
        self.subject().split_whitespace().next()
    }

    /// Trimmed lines with comment lines removed.
    ///
    /// Indentation is lost here; rules built on this view rewrite the body
    /// without it.
    pub fn content_lines(&self, config: &LintConfig) -> Vec<&str> {
        self.raw_lines()
            .map(str::trim)
            .filter(|line| !config.is_comment(line))
            .collect()
    }
}
