//! Number literal lexing.

use crate::classify::is_digit;
use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a number literal.
    ///
    /// Numbers are maximal runs of decimal digits. There is no fraction,
    /// exponent, or sign: `1.5` is NUMBER, DOT, NUMBER and `-1` is MINUS,
    /// NUMBER.
    ///
    /// # Returns
    ///
    /// A NUMBER token whose literal is the value of the digits as an `f64`.
    pub fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);

        // A digit run always parses; values beyond f64 range become infinity.
        let value = self.lexeme().parse::<f64>().ok().map(Literal::Number);
        self.make_token(TokenKind::Number, value)
    }
}

#[cfg(test)]
mod tests {
    use crate::scan;
    use crate::token::{Literal, Token, TokenKind};

    fn lex_num(source: &str) -> Token {
        scan(source).tokens.remove(0)
    }

    #[test]
    fn test_integer() {
        let token = lex_num("123");
        assert_eq!(token.kind(), TokenKind::Number);
        assert_eq!(token.lexeme(), "123");
        assert_eq!(token.literal(), Some(&Literal::Number(123.0)));
    }

    #[test]
    fn test_zero_and_leading_zeros() {
        assert_eq!(lex_num("0").literal(), Some(&Literal::Number(0.0)));
        let token = lex_num("007");
        assert_eq!(token.lexeme(), "007");
        assert_eq!(token.literal(), Some(&Literal::Number(7.0)));
    }

    #[test]
    fn test_fraction_is_not_part_of_number() {
        let output = scan("3.14");
        let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Dot,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
        assert_eq!(output.tokens[2].literal(), Some(&Literal::Number(14.0)));
    }

    #[test]
    fn test_trailing_dot() {
        let output = scan("5.");
        assert_eq!(output.tokens[0].lexeme(), "5");
        assert_eq!(output.tokens[1].kind(), TokenKind::Dot);
    }

    #[test]
    fn test_negative_is_minus_then_number() {
        let output = scan("-8");
        assert_eq!(output.tokens[0].kind(), TokenKind::Minus);
        assert_eq!(output.tokens[1].literal(), Some(&Literal::Number(8.0)));
    }

    #[test]
    fn test_huge_number_saturates() {
        let digits = "9".repeat(400);
        let token = lex_num(&digits);
        assert_eq!(token.literal(), Some(&Literal::Number(f64::INFINITY)));
    }

    #[test]
    fn test_number_followed_by_letters() {
        let output = scan("12ab");
        assert_eq!(output.tokens[0].lexeme(), "12");
        assert_eq!(output.tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(output.tokens[1].lexeme(), "ab");
    }
}
