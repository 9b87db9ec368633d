//! Operator lexing.
//!
//! This module handles the operators that have both a one- and a
//! two-character form (`!` `!=`, `=` `==`, `<` `<=`, `>` `>=`) and the slash,
//! which may start a comment.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes `!` or `!=`.
    pub fn lex_bang(&mut self) -> Token {
        self.lex_with_equals(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Lexes `=` or `==`.
    pub fn lex_equals(&mut self) -> Token {
        self.lex_with_equals(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Lexes `<` or `<=`.
    pub fn lex_less(&mut self) -> Token {
        self.lex_with_equals(TokenKind::LessEqual, TokenKind::Less)
    }

    /// Lexes `>` or `>=`.
    pub fn lex_greater(&mut self) -> Token {
        self.lex_with_equals(TokenKind::GreaterEqual, TokenKind::Greater)
    }

    /// Lexes `/`, or skips a line comment when followed by another `/`.
    ///
    /// Returns `None` for a comment.
    pub fn lex_slash(&mut self) -> Option<Token> {
        self.cursor.advance();
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }
        Some(self.make_token(TokenKind::Slash, None))
    }

    /// Consumes the operator character and an optional following `=`.
    fn lex_with_equals(&mut self, with_equals: TokenKind, alone: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            with_equals
        } else {
            alone
        };
        self.make_token(kind, None)
    }
}
