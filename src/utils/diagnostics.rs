//! Diagnostics emitted while rendering formulas
//!
//! The cleaning engine has no failure path, but a few inputs are worth
//! reporting to the caller, most notably `\frac` and `\binom` forms whose
//! arguments cannot be split. Those are delivered through a
//! [`DiagnosticSink`] supplied by the caller.
//!
//! ## Example
//!
//! ```rust
//! use wikiclean::diagnostics::CollectingSink;
//! use wikiclean::render_math_with_sink;
//!
//! let sink = CollectingSink::new();
//! let out = render_math_with_sink(r"\frac", &sink);
//! assert_eq!(out, r"\frac");
//! assert_eq!(sink.len(), 1);
//! ```

use std::fmt;
use std::sync::Mutex;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - output is degraded but usable
    Warning,
    /// Error - a construct could not be interpreted at all
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// The offending source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            source_text: None,
            suggestion: None,
        }
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Receiver for diagnostics produced during cleaning
///
/// Sinks are shared by reference across recursive cleaning calls, so
/// `report` takes `&self`.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Error => log::error!("{}", diagnostic),
            DiagnosticLevel::Warning => log::warn!("{}", diagnostic),
            DiagnosticLevel::Info => log::info!("{}", diagnostic),
        }
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Stores diagnostics for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    items: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain everything collected so far
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.items.lock() {
            Ok(mut items) => std::mem::take(&mut *items),
            Err(_) => Vec::new(),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut items) = self.items.lock() {
            items.push(diagnostic);
        }
    }
}

/// Format diagnostics for terminal output
pub fn format_diagnostics(diagnostics: &[Diagnostic], use_color: bool) -> String {
    let mut output = String::new();

    for diag in diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n");
        } else {
            output.push_str(&format!("{}\n", diag));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(DiagnosticLevel::Warning, "cannot split fraction")
            .with_source(r"\frac x")
            .with_suggestion("wrap both arguments in braces");
        let text = diag.to_string();
        assert!(text.starts_with("warning: cannot split fraction"));
        assert!(text.contains(r"| \frac x"));
        assert!(text.contains("help: wrap both"));
    }

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.report(Diagnostic::new(DiagnosticLevel::Info, "a"));
        sink.report(Diagnostic::new(DiagnosticLevel::Error, "b"));
        assert_eq!(sink.len(), 2);

        let drained = sink.take();
        assert_eq!(drained[1].level, DiagnosticLevel::Error);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_format_without_color() {
        let diags = vec![Diagnostic::new(DiagnosticLevel::Warning, "x")];
        assert_eq!(format_diagnostics(&diags, false), "warning: x\n");
    }

    #[test]
    fn test_level_ordering() {
        assert!(DiagnosticLevel::Error > DiagnosticLevel::Warning);
        assert!(DiagnosticLevel::Warning > DiagnosticLevel::Info);
    }
}
