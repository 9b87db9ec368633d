//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Scanner struct, drive loop and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - One- and two-character operators
//! - `comment` - Line comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

use serde::Serialize;
use snipcheck_util::{Diagnostic, Handler};

pub use self::core::Scanner;
use crate::token::Token;

/// Result of [`scan`]: the tokens and every diagnostic reported on the way.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScanOutput {
    /// Tokens in source order, ending with EOF.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were reported.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    /// Returns true if any error was reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scans `source` with a fresh [`Handler`].
///
/// # Example
///
/// ```
/// use snipcheck_lex::{scan, TokenKind};
///
/// let output = scan("(1+2)");
/// let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::LeftParen,
///         TokenKind::Number,
///         TokenKind::Plus,
///         TokenKind::Number,
///         TokenKind::RightParen,
///         TokenKind::Eof,
///     ]
/// );
/// assert!(!output.has_errors());
/// ```
pub fn scan(source: &str) -> ScanOutput {
    let handler = Handler::new();
    let tokens = Scanner::new(source, &handler).scan_tokens();
    ScanOutput {
        tokens,
        diagnostics: handler.into_diagnostics(),
    }
}
