// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Diagnostics and the sinks they are reported to.

use crate::config::OutputConfig;
use console::{Style, Term};
use std::io::Write;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A blocking rule violation.
    Error,
    /// Advice that never blocks the commit.
    Warning,
    /// A notice about something msglint is doing to the message.
    Info,
}

impl Severity {
    fn symbol(self) -> &'static str {
        match self {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

/// A single message produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the rule that produced it.
    pub rule: &'static str,
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(rule: &'static str, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, message)
    }

    pub fn warning(rule: &'static str, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, message)
    }

    pub fn info(rule: &'static str, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Info, message)
    }

    fn new(rule: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Destination for diagnostics, fed in rule order.
pub trait Reporter {
    /// Report a single diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Styles for each severity, resolved once from the output configuration.
#[derive(Debug, Clone)]
struct Palette {
    error: Style,
    warning: Style,
    info: Style,
    dim: Style,
}

impl Palette {
    fn new(output: OutputConfig) -> Self {
        let colors = output.colors;
        Self {
            error: Style::new().red().bold().force_styling(colors),
            warning: Style::new().yellow().force_styling(colors),
            info: Style::new().white().force_styling(colors),
            dim: Style::new().dim().force_styling(colors),
        }
    }

    fn for_severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
        }
    }
}

/// Writes diagnostics to a terminal or any other writer.
pub struct TerminalReporter<W: Write> {
    out: W,
    palette: Palette,
}

impl TerminalReporter<Term> {
    /// Reporter writing to standard error.
    pub fn stderr(output: OutputConfig) -> Self {
        Self::new(Term::stderr(), output)
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W, output: OutputConfig) -> Self {
        Self {
            out,
            palette: Palette::new(output),
        }
    }

    /// Render a diagnostic for terminal output.
    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let style = self.palette.for_severity(diagnostic.severity);
        let mut output = format!(
            "{}",
            style.apply_to(format!(
                "{} {}",
                diagnostic.severity.symbol(),
                diagnostic.message
            ))
        );

        if let Some(ref suggestion) = diagnostic.suggestion {
            output.push_str(&format!(
                "\n  {}",
                self.palette.dim.apply_to(format!("→ {}", suggestion))
            ));
        }

        output
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        let line = self.format(&diagnostic);
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!("Failed to print diagnostic from {}: {}", diagnostic.rule, e);
        }
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics of the given severity, in report order.
    pub fn with_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    /// Names of the rules that reported, in report order.
    pub fn rules(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(|d| d.rule).collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
