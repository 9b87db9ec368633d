//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its drive loop and dispatch,
//! and the lexeme builder shared by the handlers in the sibling modules.

use snipcheck_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::debug;

use crate::classify::{is_alpha, is_digit, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for the scripting language.
///
/// A scanner is single-use: [`Scanner::scan_tokens`] takes it by value and
/// returns the finished token list. Malformed input is reported into the
/// borrowed [`Handler`] and skipped; scanning never stops early.
///
/// # Example
///
/// ```
/// use snipcheck_lex::{Scanner, TokenKind};
/// use snipcheck_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = Scanner::new("print 1;", &handler).scan_tokens();
///
/// assert_eq!(tokens[0].kind(), TokenKind::Print);
/// assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
/// assert!(!handler.has_errors());
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collector for scanner diagnostics.
    handler: &'a Handler,

    /// Byte offset where the current lexeme starts.
    start: usize,

    /// Line number where the current lexeme starts (1-based).
    start_line: u32,

    /// Column number where the current lexeme starts (1-based).
    start_column: u32,

    /// Tokens produced so far, in source order.
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over `source` reporting into `handler`.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            start: 0,
            start_line: 1,
            start_column: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source.
    ///
    /// The returned list always ends with exactly one [`TokenKind::Eof`]
    /// token, whose lexeme is empty and whose line is the line the scan
    /// ended on.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        debug!(bytes = self.cursor.source().len(), "scanning source");

        while !self.cursor.is_at_end() {
            self.begin_lexeme();
            if let Some(token) = self.scan_token() {
                self.tokens.push(token);
            }
        }

        self.begin_lexeme();
        let eof = self.make_token(TokenKind::Eof, None);
        self.tokens.push(eof);

        debug!(
            tokens = self.tokens.len(),
            lines = self.cursor.line(),
            "scan finished"
        );
        self.tokens
    }

    /// Scans one lexeme starting at the cursor.
    ///
    /// Returns `None` when the lexeme produces no token: whitespace,
    /// newlines, comments, and anything that was reported as an error.
    fn scan_token(&mut self) -> Option<Token> {
        let token = match self.cursor.current_char() {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '-' => self.single(TokenKind::Minus),
            '+' => self.single(TokenKind::Plus),
            ';' => self.single(TokenKind::Semicolon),
            '*' => self.single(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => return self.lex_slash(),
            '"' => return self.lex_string(),
            '\n' => {
                self.cursor.advance();
                return None;
            },
            c if is_whitespace(c) => {
                self.cursor.advance();
                return None;
            },
            c if is_digit(c) => self.lex_number(),
            c if is_alpha(c) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                self.report_error(
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("unexpected character '{}'", c.escape_debug()),
                );
                return None;
            },
        };
        Some(token)
    }

    /// Marks the cursor position as the start of the next lexeme.
    fn begin_lexeme(&mut self) {
        self.start = self.cursor.position();
        self.start_line = self.cursor.line();
        self.start_column = self.cursor.column();
    }

    /// Consumes one character and builds a token of `kind` from it.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind, None)
    }

    /// Span of the lexeme scanned so far.
    pub(crate) fn lexeme_span(&self) -> Span {
        Span::new(
            self.start,
            self.cursor.position(),
            self.start_line,
            self.start_column,
        )
    }

    /// Source text of the lexeme scanned so far.
    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.start)
    }

    /// Packages the current lexeme into a token.
    pub(crate) fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(
            kind,
            self.lexeme(),
            literal,
            self.start_line,
            self.lexeme_span(),
        )
    }

    /// Reports an error covering the current lexeme.
    pub(crate) fn report_error(&self, code: DiagnosticCode, message: String) {
        self.error_builder(code, message).emit(self.handler);
    }

    /// Starts an error diagnostic covering the current lexeme.
    ///
    /// Callers that want to attach help use this instead of
    /// [`Scanner::report_error`] and emit the builder themselves.
    pub(crate) fn error_builder(&self, code: DiagnosticCode, message: String) -> DiagnosticBuilder {
        let span = self.lexeme_span();
        debug!(
            code = %code,
            line = span.line,
            column = span.column,
            "{}",
            message
        );
        DiagnosticBuilder::error(message).code(code).span(span)
    }

    /// Returns the diagnostic handler.
    pub(crate) fn handler(&self) -> &'a Handler {
        self.handler
    }
}
