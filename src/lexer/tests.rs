//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Labels and contextual keywords
//! - Numeric literals and the sign/minus distinction
//! - String and char literals with escape sequences
//! - Operators by longest match
//! - Comments and line-break tracking
//! - Error cases

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Keyword, TokenKind},
};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.teko".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_labels_and_keywords() {
    let source = "foo bar_1 _x if then else fn type true".to_string();
    let tokens = tokenize(source, Some("test.teko".to_string())).unwrap();

    assert!(tokens[..9].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_1");
    assert_eq!(tokens[2].value, "_x");
    assert_eq!(tokens[0].keyword(), None);
    assert!(tokens[3].is_keyword(Keyword::If));
    assert!(tokens[4].is_keyword(Keyword::Then));
    assert!(tokens[5].is_keyword(Keyword::Else));
    assert!(tokens[6].is_keyword(Keyword::Fn));
    assert!(tokens[7].is_keyword(Keyword::Type));
    assert!(tokens[8].is_keyword(Keyword::True));
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.teko".to_string())).unwrap();

    let values: Vec<&str> = tokens[..4].iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", "0", "100.5"]);
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_negative_number_only_without_left_operand() {
    let tokens = tokenize("-1".to_string(), None).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "-1");

    assert_eq!(
        kinds("a-1"),
        vec![TokenKind::Identifier, TokenKind::Dash, TokenKind::Number, TokenKind::EOF]
    );
    assert_eq!(
        kinds("(1)-2"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );

    let tokens = tokenize("a\n-1".to_string(), None).unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "-1");
    assert!(tokens[1].newline_before);

    let tokens = tokenize("f(-1) a - -2".to_string(), None).unwrap();
    assert_eq!(tokens[2].value, "-1");
    assert_eq!(tokens[5].kind, TokenKind::Dash);
    assert_eq!(tokens[6].value, "-2");
}

#[test]
fn test_tokenize_strings_with_escapes() {
    let source = r#""hello" "a\nb" "say \"hi\"" "\x41\t\\""#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "a\nb");
    assert_eq!(tokens[2].value, "say \"hi\"");
    assert_eq!(tokens[3].value, "A\t\\");
}

#[test]
fn test_tokenize_chars() {
    let source = r#"'a' '\'' '"' '\x7e'"#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Char));
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].value, "'");
    assert_eq!(tokens[2].value, "\"");
    assert_eq!(tokens[3].value, "~");
}

#[test]
fn test_tokenize_operators_longest_match() {
    assert_eq!(
        kinds("== != <= >= <: <- -> += -= *= /= %= ^="),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Subtype,
            TokenKind::LeftArrow,
            TokenKind::Arrow,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::CaretEquals,
            TokenKind::EOF
        ]
    );

    assert_eq!(
        kinds("< > = + * / % ^ & | . $ # ? : ; , ( ) [ ] { }"),
        vec![
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::Ampersand,
            TokenKind::Pipe,
            TokenKind::Dot,
            TokenKind::Dollar,
            TokenKind::Hash,
            TokenKind::Question,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("a // line comment\n/* block\ncomment */ b"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(kinds("a /* inline */ + b"), kinds("a + b"));
}

#[test]
fn test_newline_before() {
    let tokens = tokenize("a b\nc /* x\n */ d // e\n".to_string(), None).unwrap();

    assert!(!tokens[0].newline_before);
    assert!(!tokens[1].newline_before);
    assert!(tokens[2].newline_before);
    assert!(tokens[3].newline_before);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert!(tokens[4].newline_before);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("foo + 42".to_string(), Some("test.teko".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 5);
    assert_eq!(tokens[2].span.start.0, 6);
    assert_eq!(tokens[2].span.end.0, 8);
    assert_eq!(tokens[3].span.start.0, 8);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.teko");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None).unwrap();
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("a b".to_string(), None);

    assert_eq!(lexer.peek().unwrap().value, "a");
    assert_eq!(lexer.peek().unwrap().value, "a");
    assert_eq!(lexer.next_token().unwrap().value, "a");
    assert_eq!(lexer.next_token().unwrap().value, "b");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("\"abc".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnterminatedLiteral { delimiter: '"' }
    );
    assert_eq!(error.get_position().0, 0);

    let error = tokenize("x = \"abc\ndef\"".to_string(), None).unwrap_err();
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_unterminated_char() {
    let error = tokenize("c := 'a".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnterminatedLiteral { delimiter: '\'' }
    );
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_invalid_escape() {
    let error = tokenize(r#"x = "\q""#.to_string(), None).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidEscape {
            escape: String::from("\\q")
        }
    );
    assert_eq!(error.get_position().0, 5);

    let error = tokenize(r#""ab\x4""#.to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidEscape");
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_invalid_char_literal() {
    let error = tokenize("'ab'".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidCharLiteral");

    let error = tokenize("''".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidCharLiteral");
}

#[test]
fn test_unterminated_comment() {
    let error = tokenize("a /* never closed".to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("a @ b".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: String::from("@")
        }
    );
    assert_eq!(error.get_position().0, 2);
    assert!(error.is_lex_error());
}
