//! Identifier and keyword lexing.

use crate::classify::is_alpha;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of ASCII letters and underscores, then
    /// checks it against the keyword table.
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_alpha);
        let kind = keyword_from_ident(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::scan;
    use crate::token::{Token, TokenKind};

    fn lex_ident(source: &str) -> Token {
        scan(source).tokens.remove(0)
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("counter");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), "counter");
        assert_eq!(token.literal(), None);
    }

    #[test]
    fn test_underscores() {
        assert_eq!(lex_ident("_").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("__init__").lexeme(), "__init__");
        assert_eq!(lex_ident("snake_case").lexeme(), "snake_case");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_ident("class").kind(), TokenKind::Class);
        assert_eq!(lex_ident("nil").kind(), TokenKind::Nil);
        assert_eq!(lex_ident("while").kind(), TokenKind::While);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("classy").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("or_else").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("Var").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_digits_end_identifier() {
        let output = scan("x1");
        assert_eq!(output.tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(output.tokens[0].lexeme(), "x");
        assert_eq!(output.tokens[1].kind(), TokenKind::Number);
        assert!(output.diagnostics.is_empty());
    }
}
