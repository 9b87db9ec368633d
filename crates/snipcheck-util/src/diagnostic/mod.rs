//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! scanner diagnostics. Diagnostics never abort a scan; they are collected
//! by a [`Handler`] and inspected or rendered afterwards.
//!
//! # Examples
//!
//! ```
//! use snipcheck_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     eprintln!("scan reported {} error(s)", handler.error_count());
//! }
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};

pub use crate::span::Span;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// The scanner only reports errors.
///
/// ```
/// use snipcheck_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// An error in the input
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic for a terminal, quoting the offending line
    /// of `source` under the message.
    ///
    /// ```
    /// use snipcheck_util::diagnostic::{Diagnostic, DiagnosticCode, Span};
    ///
    /// let diag = Diagnostic::error("unexpected character '#'", Span::new(2, 3, 1, 3))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    /// let rendered = diag.render("1 # 2");
    /// assert!(rendered.starts_with("error[E1001]: unexpected character '#'\n  --> 1:3"));
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        if self.span.line > 0 {
            out.push_str(&format!("\n  --> {}", self.span));
        }
        if let Some(snippet) = SourceSnippet::from_source(source, self.span) {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    /// One-line form: `error[E1001]: message`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics in emission order and provides
/// methods for querying their counts. It uses interior mutability so a
/// scanner can report through a shared reference.
///
/// # Examples
///
/// ```
/// use snipcheck_util::diagnostic::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unterminated string", Span::DUMMY));
/// assert!(handler.has_errors());
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get a copy of all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler and return its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
