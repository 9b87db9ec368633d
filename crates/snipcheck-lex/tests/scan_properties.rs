//! Property tests for the scanner.

use proptest::prelude::*;
use snipcheck_lex::{scan, Literal, TokenKind};

const OPERATORS: &[&str] = &[
    "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "/", "!", "!=", "=", "==", "<", "<=", ">",
    ">=",
];

/// Source fragments that scan cleanly on their own.
fn clean_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_]{1,12}",
        "[0-9]{1,10}",
        "\"[^\"]{0,20}\"",
        prop::sample::select(OPERATORS).prop_map(str::to_string),
        "[ \t\r\n]{1,4}",
        "//[^\n]{0,20}\n",
    ]
}

fn clean_source() -> impl Strategy<Value = String> {
    prop::collection::vec(clean_piece(), 0..40).prop_map(|pieces| pieces.join(" "))
}

proptest! {
    #[test]
    fn test_property_always_ends_with_single_eof(source in any::<String>()) {
        let output = scan(&source);
        let last = output.tokens.last().expect("at least one token");

        prop_assert_eq!(last.kind(), TokenKind::Eof);
        prop_assert_eq!(last.lexeme(), "");
        prop_assert_eq!(
            output.tokens.iter().filter(|t| t.kind() == TokenKind::Eof).count(),
            1
        );
    }

    #[test]
    fn test_property_lines_follow_newlines(source in "(?s).{0,200}") {
        let output = scan(&source);
        let mut previous = 1;

        for token in &output.tokens {
            let start = token.span().start;
            let expected = 1 + source[..start].matches('\n').count() as u32;
            prop_assert_eq!(token.line(), expected);
            prop_assert!(token.line() >= previous);
            previous = token.line();
        }

        let eof = output.tokens.last().expect("eof");
        prop_assert_eq!(eof.line(), 1 + source.matches('\n').count() as u32);
    }

    #[test]
    fn test_property_lexemes_reconstruct_clean_source(source in clean_source()) {
        let output = scan(&source);
        prop_assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);

        let mut rebuilt = String::new();
        let mut offset = 0;
        for token in &output.tokens {
            let span = token.span();
            prop_assert!(span.start >= offset);
            prop_assert_eq!(&source[span.start..span.end], token.lexeme());

            // Gaps hold only whitespace and comments.
            let gap = &source[offset..span.start];
            let gap_output = scan(gap);
            prop_assert_eq!(gap_output.tokens.len(), 1);
            prop_assert!(gap_output.diagnostics.is_empty());

            rebuilt.push_str(gap);
            rebuilt.push_str(token.lexeme());
            offset = span.end;
        }

        prop_assert_eq!(offset, source.len());
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_property_digit_runs_are_numbers(digits in "[0-9]{1,30}") {
        let output = scan(&digits);
        prop_assert_eq!(output.tokens.len(), 2);
        prop_assert_eq!(output.tokens[0].kind(), TokenKind::Number);
        let expected: f64 = digits.parse().expect("digits");
        prop_assert_eq!(output.tokens[0].literal(), Some(&Literal::Number(expected)));
    }

    #[test]
    fn test_property_string_literal_is_inner_text(body in "[^\"]{0,60}") {
        let source = format!("\"{}\"", body);
        let output = scan(&source);
        prop_assert_eq!(output.tokens.len(), 2);
        prop_assert_eq!(output.tokens[0].literal(), Some(&Literal::String(body.clone())));
        prop_assert_eq!(
            output.tokens[1].line(),
            1 + body.matches('\n').count() as u32
        );
    }

    #[test]
    fn test_property_identifiers(input in "[a-zA-Z_]{1,40}") {
        let output = scan(&input);
        prop_assert_eq!(output.tokens.len(), 2);
        let kind = output.tokens[0].kind();
        prop_assert!(kind == TokenKind::Identifier || kind.is_keyword());
        prop_assert_eq!(output.tokens[0].lexeme(), input.as_str());
    }
}
