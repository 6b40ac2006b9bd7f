// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.

/// Maximum number of characters allowed in the subject line.
pub const MAX_SUBJECT_LENGTH: usize = 50;

/// Column at which body lines are wrapped.
pub const MAX_BODY_WIDTH: usize = 72;

/// Marker that starts a comment line git strips from the final message.
pub const COMMENT_MARKER: &str = "#";

/// Subject prefix written by `git commit --fixup`.
pub const FIXUP_PREFIX: &str = "fixup!";

/// Limits and markers the built-in rules check against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Maximum length of the subject line.
    pub max_subject_length: usize,

    /// Width body lines are wrapped to.
    pub max_body_width: usize,

    /// Prefix identifying comment lines.
    pub comment_marker: String,

    /// Subject prefix exempt from the capitalization rule.
    pub fixup_prefix: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_subject_length: MAX_SUBJECT_LENGTH,
            max_body_width: MAX_BODY_WIDTH,
            comment_marker: COMMENT_MARKER.to_string(),
            fixup_prefix: FIXUP_PREFIX.to_string(),
        }
    }
}

impl LintConfig {
    /// Whether a (trimmed) line is a comment line.
    pub fn is_comment(&self, line: &str) -> bool {
        line.starts_with(self.comment_marker.as_str())
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Whether diagnostics are styled with ANSI colors.
    pub colors: bool,
}

impl OutputConfig {
    /// Output configuration with colors forced on or off.
    pub fn with_colors(colors: bool) -> Self {
        Self { colors }
    }
}
