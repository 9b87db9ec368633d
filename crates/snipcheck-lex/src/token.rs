//! Token definitions.
//!
//! A [`Token`] is one classified lexeme: its [`TokenKind`], the exact source
//! text, an optional decoded [`Literal`], the line it started on, and its
//! [`Span`].

use std::fmt;

use serde::Serialize;
use snipcheck_util::Span;

/// The category of a lexeme.
///
/// Serializes and displays in `SCREAMING_SNAKE_CASE` (`LEFT_PAREN`,
/// `BANG_EQUAL`, `EOF`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Single-character punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One- or two-character operators
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// A user-defined name.
    Identifier,
    /// A double-quoted string literal.
    String,
    /// A run of decimal digits.
    Number,

    // Keywords
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns the display name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up a reserved word.
///
/// Returns `None` for anything that is not a keyword, including keywords in
/// a different case.
///
/// # Example
///
/// ```
/// use snipcheck_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// A decoded literal value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Value of a NUMBER token.
    Number(f64),
    /// Contents of a STRING token, without the quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers keep a trailing `.0` so they read as numbers.
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// A classified lexeme.
///
/// Tokens are immutable once built; fields are read through accessors.
///
/// # Example
///
/// ```
/// use snipcheck_lex::scan;
///
/// let output = scan("1");
/// assert_eq!(output.tokens[0].to_string(), "NUMBER 1 1.0");
/// assert_eq!(output.tokens[1].to_string(), "EOF  null");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Option<Literal>,
    line: u32,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The lexeme category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of this token. Empty for EOF.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The decoded value for NUMBER and STRING tokens.
    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// The 1-based line on which the lexeme starts.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The source range of the lexeme.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(kind: TokenKind, lexeme: &str, literal: Option<Literal>) -> Token {
        Token::new(kind, lexeme, literal, 1, Span::new(0, lexeme.len(), 1, 1))
    }

    #[test]
    fn test_all_keywords() {
        let words = [
            "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ];
        for word in words {
            let kind = keyword_from_ident(word).expect("keyword");
            assert!(kind.is_keyword());
            assert_eq!(kind.as_str(), word.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_non_keywords() {
        assert_eq!(keyword_from_ident("orchid"), None);
        assert_eq!(keyword_from_ident("NIL"), None);
        assert_eq!(keyword_from_ident(""), None);
        assert!(!TokenKind::Identifier.is_keyword());
    }

    #[test]
    fn test_display_with_literal() {
        let t = token(TokenKind::Number, "42", Some(Literal::Number(42.0)));
        assert_eq!(t.to_string(), "NUMBER 42 42.0");

        let t = token(
            TokenKind::String,
            "\"hi\"",
            Some(Literal::String("hi".to_string())),
        );
        assert_eq!(t.to_string(), "STRING \"hi\" hi");
    }

    #[test]
    fn test_display_without_literal() {
        let t = token(TokenKind::BangEqual, "!=", None);
        assert_eq!(t.to_string(), "BANG_EQUAL != null");
    }

    #[test]
    fn test_literal_display_large_number() {
        assert_eq!(Literal::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Literal::Number(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_serialize_token() {
        let t = token(TokenKind::Number, "7", Some(Literal::Number(7.0)));
        let json = serde_json::to_value(&t).expect("serialize");
        assert_eq!(json["kind"], "NUMBER");
        assert_eq!(json["lexeme"], "7");
        assert_eq!(json["literal"], 7.0);
        assert_eq!(json["line"], 1);
        assert_eq!(json["span"]["end"], 1);
    }

    #[test]
    fn test_serialize_kind_names_match_display() {
        for kind in [
            TokenKind::LeftParen,
            TokenKind::GreaterEqual,
            TokenKind::Identifier,
            TokenKind::Eof,
        ] {
            let json = serde_json::to_value(kind).expect("serialize");
            assert_eq!(json, kind.as_str());
        }
    }
}
