//! snipcheck-lex - Lexical scanner for the snippet scripting language
//!
//! This crate turns the source text of a small dynamically-typed scripting
//! language into a flat list of classified tokens, in one left-to-right pass
//! with at most one character of lookahead.
//!
//! # Example Usage
//!
//! ```
//! use snipcheck_lex::{scan, TokenKind};
//!
//! let output = scan("var x = 1;");
//!
//! for token in &output.tokens {
//!     println!("{}", token);
//! }
//!
//! assert_eq!(output.tokens[0].kind(), TokenKind::Var);
//! assert_eq!(output.tokens[1].lexeme(), "x");
//! assert!(output.diagnostics.is_empty());
//! ```
//!
//! The [`Scanner`] can also be driven directly with a caller-owned
//! [`Handler`](snipcheck_util::Handler):
//!
//! ```
//! use snipcheck_lex::Scanner;
//! use snipcheck_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = Scanner::new("print \"hi\" # oops", &handler).scan_tokens();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(handler.error_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and the keyword table
//! - [`scanner`] - The scanner and the [`scan`] entry point
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classes
//!
//! # Token Categories
//!
//! ## Punctuation
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `/` `*`
//!
//! ## Operators
//!
//! `!` `!=` `=` `==` `>` `>=` `<` `<=`. The two-character form always wins.
//!
//! ## Literals
//!
//! - **Identifier**: `[A-Za-z_]+`. Digits end an identifier.
//! - **Number**: `[0-9]+`, decoded as `f64`.
//! - **String**: `"..."`, may span lines, no escapes.
//!
//! ## Keywords
//!
//! `and` `class` `else` `false` `for` `fun` `if` `nil` `or` `print`
//! `return` `super` `this` `true` `var` `while`
//!
//! ## Skipped
//!
//! Spaces, tabs, carriage returns, newlines, and `//` line comments.
//!
//! # Diagnostics
//!
//! Unexpected characters (`E1001`) and unterminated strings (`E1002`) are
//! reported and skipped. Every scan ends with exactly one EOF token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::{scan, ScanOutput, Scanner};
pub use token::{keyword_from_ident, Literal, Token, TokenKind};
