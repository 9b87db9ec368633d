//! String literal lexing.

use snipcheck_util::DiagnosticCode;

use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a string literal.
    ///
    /// Strings run from `"` to the next `"` and may span lines. Escape
    /// sequences are not interpreted, so a backslash cannot hide the closing
    /// quote. The literal value is the raw text between the quotes.
    ///
    /// # Returns
    ///
    /// `None` if the input ends before the closing quote; the error is
    /// reported and the partial lexeme is dropped.
    pub fn lex_string(&mut self) -> Option<Token> {
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.error_builder(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                "unterminated string".to_string(),
            )
            .help("add a closing '\"'")
            .emit(self.handler());
            return None;
        }

        self.cursor.advance();

        let lexeme = self.lexeme();
        // Both quotes are one byte wide.
        let value = &lexeme[1..lexeme.len() - 1];
        Some(self.make_token(TokenKind::String, Some(Literal::String(value.to_string()))))
    }
}
