// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rules and the static table that registers them.

use crate::commit::{wrap, CommitMessage};
use crate::config::LintConfig;
use crate::report::{Diagnostic, Reporter};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Issue-tracker key such as `ABC-123` at the start of the subject.
    static ref ISSUE_KEY_REGEX: Regex = Regex::new(r"^[A-Z]+-\d+").unwrap();
}

/// Execution tier. Lower tiers run first.
pub type Tier = u8;

/// Tier for pure validations, which must see the message as written.
pub const VALIDATION_TIER: Tier = 1;

/// Tier for rules that rewrite the message.
pub const REWRITE_TIER: Tier = 2;

/// What a rule decided about the message it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The message passes and is left as is.
    Accepted,
    /// The message passes and is replaced.
    Rewritten(CommitMessage),
    /// The message fails; it is left as is.
    Rejected,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Verdict::Rejected)
    }
}

/// Signature shared by every rule.
pub type RuleFn = fn(&CommitMessage, &LintConfig, &mut dyn Reporter) -> Verdict;

/// A registered rule.
#[derive(Clone, Copy)]
pub struct RuleEntry {
    /// Unique rule name, also used as the diagnostic code.
    pub name: &'static str,
    /// Execution tier.
    pub tier: Tier,
    /// The check or transform.
    pub apply: RuleFn,
}

impl std::fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEntry")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

impl RuleEntry {
    pub const fn new(name: &'static str, tier: Tier, apply: RuleFn) -> Self {
        Self { name, tier, apply }
    }
}

pub const SUBJECT_CAPITALIZED: &str = "subject-capitalized";
pub const SUBJECT_MAX_LENGTH: &str = "subject-max-length";
pub const SUBJECT_NO_TRAILING_PERIOD: &str = "subject-no-trailing-period";
pub const BLANK_LINE_AFTER_SUBJECT: &str = "blank-line-after-subject";
pub const SUBJECT_NO_ISSUE_KEY: &str = "subject-no-issue-key";
pub const SUBJECT_IMPERATIVE_MOOD: &str = "subject-imperative-mood";
pub const BODY_WRAP: &str = "body-wrap";

/// Every built-in rule, in registration order.
pub static BUILTIN_RULES: &[RuleEntry] = &[
    RuleEntry::new(SUBJECT_CAPITALIZED, VALIDATION_TIER, check_subject_capitalized),
    RuleEntry::new(SUBJECT_MAX_LENGTH, VALIDATION_TIER, check_subject_max_length),
    RuleEntry::new(
        SUBJECT_NO_TRAILING_PERIOD,
        VALIDATION_TIER,
        check_subject_trailing_period,
    ),
    RuleEntry::new(
        BLANK_LINE_AFTER_SUBJECT,
        VALIDATION_TIER,
        check_blank_line_after_subject,
    ),
    RuleEntry::new(SUBJECT_NO_ISSUE_KEY, VALIDATION_TIER, check_subject_issue_key),
    RuleEntry::new(
        SUBJECT_IMPERATIVE_MOOD,
        VALIDATION_TIER,
        check_imperative_mood,
    ),
    RuleEntry::new(BODY_WRAP, REWRITE_TIER, wrap_body),
];

fn reject(reporter: &mut dyn Reporter, diagnostic: Diagnostic) -> Verdict {
    reporter.report(diagnostic);
    Verdict::Rejected
}

/// Check that the subject starts with an uppercase letter.
///
/// Subjects written by `git commit --fixup` are exempt.
pub fn check_subject_capitalized(
    message: &CommitMessage,
    config: &LintConfig,
    reporter: &mut dyn Reporter,
) -> Verdict {
    let subject = message.subject();
    if subject.starts_with(config.fixup_prefix.as_str()) {
        return Verdict::Accepted;
    }

    match subject.chars().next() {
        Some(c) if c.is_uppercase() => Verdict::Accepted,
        _ => reject(
            reporter,
            Diagnostic::error(SUBJECT_CAPITALIZED, "Subject line should be capitalized")
                .with_suggestion("Start the subject with an uppercase letter"),
        ),
    }
}

/// Check maximum subject length.
pub fn check_subject_max_length(
    message: &CommitMessage,
    config: &LintConfig,
    reporter: &mut dyn Reporter,
) -> Verdict {
    let max = config.max_subject_length;
    let len = message.subject().chars().count();

    if len > max {
        reject(
            reporter,
            Diagnostic::error(
                SUBJECT_MAX_LENGTH,
                format!(
                    "Subject should be no longer than {} characters (found {})",
                    max, len
                ),
            ),
        )
    } else {
        Verdict::Accepted
    }
}

/// Check that the subject does not end with a period.
pub fn check_subject_trailing_period(
    message: &CommitMessage,
    _config: &LintConfig,
    reporter: &mut dyn Reporter,
) -> Verdict {
    if message.subject().ends_with('.') {
        reject(
            reporter,
            Diagnostic::error(
                SUBJECT_NO_TRAILING_PERIOD,
                "Subject should not end with a period",
            )
            .with_suggestion("Remove the trailing period"),
        )
    } else {
        Verdict::Accepted
    }
}

/// Check that the subject is followed by a blank line, ignoring comments.
pub fn check_blank_line_after_subject(
    message: &CommitMessage,
    config: &LintConfig,
    reporter: &mut dyn Reporter,
) -> Verdict {
    let lines = message.content_lines(config);
    match lines.get(1) {
        Some(second) if !second.is_empty() => reject(
            reporter,
            Diagnostic::error(
                BLANK_LINE_AFTER_SUBJECT,
                "Separate subject from body with a blank line",
            ),
        ),
        _ => Verdict::Accepted,
    }
}

/// Check that the subject does not open with an issue key like `ABC-123`.
pub fn check_subject_issue_key(
    message: &CommitMessage,
    _config: &LintConfig,
    reporter: &mut dyn Reporter,
) -> Verdict {
    if ISSUE_KEY_REGEX.is_match(message.subject()) {
        reject(
            reporter,
            Diagnostic::error(
                SUBJECT_NO_ISSUE_KEY,
                "Subject should not contain an issue key",
            )
            .with_suggestion("Move the issue reference into the body"),
        )
    } else {
        Verdict::Accepted
    }
}

/// Warn when the first word looks like third person ("Adds" rather than "Add").
///
/// Never rejects.
pub fn check_imperative_mood(
    message: &CommitMessage,
    _config: &LintConfig,
    reporter: &mut dyn Reporter,
) -> Verdict {
    if let Some(word) = message.first_word() {
        if word.ends_with('s') && !word.ends_with("ss") {
            reporter.report(
                Diagnostic::warning(
                    SUBJECT_IMPERATIVE_MOOD,
                    format!("Subject should use imperative mood (found '{}')", word),
                )
                .with_suggestion("Use the imperative form, e.g. 'Add' not 'Adds'"),
            );
        }
    }
    Verdict::Accepted
}

/// Drop comment lines, trim every line and hard-wrap it to the body width.
///
/// Always accepts.
pub fn wrap_body(
    message: &CommitMessage,
    config: &LintConfig,
    reporter: &mut dyn Reporter,
) -> Verdict {
    let width = config.max_body_width;
    let lines = message.content_lines(config);

    if lines.iter().any(|l| l.chars().count() > width) {
        reporter.report(Diagnostic::info(
            BODY_WRAP,
            format!(
                "Some lines are longer than {} characters and will be wrapped automatically",
                width
            ),
        ));
    }

    let wrapped = lines.iter().map(|line| wrap::fill(line, width));
    Verdict::Rewritten(CommitMessage::from_lines(wrapped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{MemoryReporter, Severity};

    fn apply(rule: RuleFn, text: &str) -> (Verdict, MemoryReporter) {
        let mut reporter = MemoryReporter::new();
        let verdict = rule(&CommitMessage::new(text), &LintConfig::default(), &mut reporter);
        (verdict, reporter)
    }

    #[test]
    fn test_capitalized_subject() {
        assert_eq!(apply(check_subject_capitalized, "Fix bug").0, Verdict::Accepted);

        let (verdict, reporter) = apply(check_subject_capitalized, "fix bug");
        assert_eq!(verdict, Verdict::Rejected);
        assert_eq!(reporter.rules(), vec![SUBJECT_CAPITALIZED]);
    }

    #[test]
    fn test_fixup_exempt_from_capitalization() {
        assert_eq!(
            apply(check_subject_capitalized, "fixup! something").0,
            Verdict::Accepted
        );
        assert_eq!(
            apply(check_subject_capitalized, "  fixup! lower case").0,
            Verdict::Accepted
        );
    }

    #[test]
    fn test_empty_or_non_letter_subject_not_capitalized() {
        assert_eq!(apply(check_subject_capitalized, "   \nBody").0, Verdict::Rejected);
        assert_eq!(apply(check_subject_capitalized, "1.2 release").0, Verdict::Rejected);
    }

    #[test]
    fn test_subject_max_length() {
        let (verdict, reporter) = apply(check_subject_max_length, &"a".repeat(51));
        assert_eq!(verdict, Verdict::Rejected);
        assert_eq!(
            reporter.diagnostics[0].message,
            "Subject should be no longer than 50 characters (found 51)"
        );

        assert_eq!(
            apply(check_subject_max_length, &"a".repeat(50)).0,
            Verdict::Accepted
        );
        // surrounding whitespace does not count
        let padded = format!("  {}  \n", "a".repeat(50));
        assert_eq!(apply(check_subject_max_length, &padded).0, Verdict::Accepted);
    }

    #[test]
    fn test_trailing_period() {
        assert_eq!(
            apply(check_subject_trailing_period, "Fix bug.\n").0,
            Verdict::Rejected
        );
        assert_eq!(
            apply(check_subject_trailing_period, "Fix bug\n\nEnds here.").0,
            Verdict::Accepted
        );
    }

    #[test]
    fn test_blank_line_after_subject() {
        assert_eq!(
            apply(check_blank_line_after_subject, "Fix bug\nBody text").0,
            Verdict::Rejected
        );
        assert_eq!(
            apply(check_blank_line_after_subject, "Fix bug\n\nBody text").0,
            Verdict::Accepted
        );
        assert_eq!(apply(check_blank_line_after_subject, "Fix bug").0, Verdict::Accepted);
    }

    #[test]
    fn test_blank_line_ignores_comments_and_whitespace() {
        assert_eq!(
            apply(
                check_blank_line_after_subject,
                "Fix bug\n# Please enter the commit message\n   \nBody"
            )
            .0,
            Verdict::Accepted
        );
        assert_eq!(
            apply(check_blank_line_after_subject, "Fix bug\n# comment\nBody").0,
            Verdict::Rejected
        );
    }

    #[test]
    fn test_issue_key() {
        assert_eq!(
            apply(check_subject_issue_key, "ABC-123 fix thing").0,
            Verdict::Rejected
        );
        assert_eq!(
            apply(check_subject_issue_key, "Fix ABC-123 regression").0,
            Verdict::Accepted
        );
        assert_eq!(apply(check_subject_issue_key, "abc-123 fix").0, Verdict::Accepted);
    }

    #[test]
    fn test_imperative_mood_warns_only() {
        let (verdict, reporter) = apply(check_imperative_mood, "Adds feature");
        assert_eq!(verdict, Verdict::Accepted);
        let warnings = reporter.with_severity(Severity::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("'Adds'"));
        assert_eq!(
            warnings[0].suggestion.as_deref(),
            Some("Use the imperative form, e.g. 'Add' not 'Adds'")
        );

        // the suggestion never guesses a stem from the subject
        for subject in ["Focus on parser", "Status page redesign", "Is this needed"] {
            let (verdict, reporter) = apply(check_imperative_mood, subject);
            assert_eq!(verdict, Verdict::Accepted);
            assert_eq!(
                reporter.diagnostics[0].suggestion.as_deref(),
                Some("Use the imperative form, e.g. 'Add' not 'Adds'")
            );
        }

        let (_, reporter) = apply(check_imperative_mood, "Add feature");
        assert!(reporter.diagnostics.is_empty());

        let (_, reporter) = apply(check_imperative_mood, "Address review comments");
        assert!(reporter.diagnostics.is_empty());
    }

    #[test]
    fn test_wrap_body_splits_long_lines() {
        let text = format!("Fix bug\n\n{}\n", "x".repeat(100));
        let (verdict, reporter) = apply(wrap_body, &text);

        let expected = format!("Fix bug\n\n{}\n{}\n", "x".repeat(72), "x".repeat(28));
        assert_eq!(verdict, Verdict::Rewritten(CommitMessage::new(expected)));
        assert_eq!(reporter.with_severity(Severity::Info).len(), 1);
    }

    #[test]
    fn test_wrap_body_is_idempotent() {
        let text = format!("Fix bug\n\n{}", "word ".repeat(40));
        let Verdict::Rewritten(once) = apply(wrap_body, &text).0 else {
            panic!("wrap_body must rewrite");
        };
        let (verdict, reporter) = apply(wrap_body, once.as_str());
        assert_eq!(verdict, Verdict::Rewritten(once));
        assert!(reporter.diagnostics.is_empty());
    }

    #[test]
    fn test_wrap_body_drops_comments_and_indentation() {
        let text = "Fix bug\n\n    indented\n# Please enter the commit message\n";
        let (verdict, reporter) = apply(wrap_body, text);
        assert_eq!(
            verdict,
            Verdict::Rewritten(CommitMessage::new("Fix bug\n\nindented\n"))
        );
        assert!(reporter.diagnostics.is_empty());
    }

    #[test]
    fn test_builtin_tiers() {
        for entry in BUILTIN_RULES {
            let expected = if entry.name == BODY_WRAP {
                REWRITE_TIER
            } else {
                VALIDATION_TIER
            };
            assert_eq!(entry.tier, expected, "{}", entry.name);
        }
    }
}
