//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for rendering the
//! offending source line underneath a message.

use serde::Serialize;

use super::{Diagnostic, DiagnosticCode, Handler, Level, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the
/// highlighted column range.
///
/// # Examples
///
/// ```
/// use snipcheck_util::diagnostic::{SourceSnippet, Span};
///
/// let snippet = SourceSnippet::from_source("var x = #;", Span::new(8, 9, 1, 9)).unwrap();
/// assert_eq!(snippet.format(), "  1 | var x = #;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build a snippet for `span` by locating its line in `source`.
    ///
    /// Only the first line is shown when the span crosses a line break.
    /// Returns `None` for spans without a line (such as [`Span::DUMMY`]).
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        if span.line == 0 {
            return None;
        }
        let line = source.lines().nth(span.line as usize - 1)?;
        let start_column = span.column.max(1) as usize;
        let width = span
            .snippet(source)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(1)
            .max(1);
        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line pointing at the
    /// highlighted range. Tabs before the range are repeated in the caret
    /// line so the caret stays under its character.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let indent: String = self
            .line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(underline_start)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        result.push_str(&indent);
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use snipcheck_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character '#'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(8, 9, 1, 9))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
