//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

fn position(offset: u32) -> Position {
    Position(offset, Arc::new("test.teko".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
    assert!(error.is_lex_error());
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnterminatedComment, position(3));
    assert_eq!(error.to_string(), "unterminated block comment at test.teko:3");
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
            expected: vec![TokenKind::Comma, TokenKind::CloseBracket],
        },
        position(0),
    );

    assert!(!error.is_lex_error());
    assert_eq!(error.expected(), &[TokenKind::Comma, TokenKind::CloseBracket]);
    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `)`, expected one of: Comma, CloseBracket"
    );
}

#[test]
fn test_unexpected_end_of_input() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: vec![TokenKind::CloseParen],
        },
        position(5),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.expected(), &[TokenKind::CloseParen]);
    assert_eq!(
        error.get_tip().to_string(),
        "Input ended early, expected one of: CloseParen"
    );
}

#[test]
fn test_lex_errors_have_no_expected_set() {
    let error = Error::new(
        ErrorImpl::InvalidEscape {
            escape: "\\q".to_string(),
        },
        position(1),
    );

    assert!(error.expected().is_empty());
    assert!(error.is_lex_error());
}

#[test]
fn test_line_column() {
    let source = "a := 1\nb := ä + )\n";
    // `)` sits after a two-byte character
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
            expected: vec![],
        },
        position(17),
    );

    assert_eq!(error.line_column(source), Some((2, 10)));
    assert_eq!(error.get_tip().to_string(), "Unexpected token: `)`");
}

#[test]
fn test_missing_else_branch() {
    let error = Error::new(ErrorImpl::MissingElseBranch, position(0));

    assert_eq!(error.get_error_name(), "MissingElseBranch");
    assert!(!error.is_lex_error());
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
