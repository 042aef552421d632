use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// 1-based line and column of the error within `source`.
    pub fn line_column(&self, source: &str) -> Option<(usize, usize)> {
        get_line_at_position(source, self.position.0)
            .map(|(line, text, byte_column)| {
                let column = text
                    .get(..byte_column)
                    .map_or(byte_column, |prefix| prefix.chars().count());
                (line, column + 1)
            })
    }

    /// Token kinds that would have been accepted, for parse errors.
    pub fn expected(&self) -> &[TokenKind] {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. }
            | ErrorImpl::UnexpectedEndOfInput { expected } => expected,
            _ => &[],
        }
    }

    pub fn is_lex_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::InvalidEscape { .. }
                | ErrorImpl::UnterminatedLiteral { .. }
                | ErrorImpl::UnterminatedComment
                | ErrorImpl::InvalidCharLiteral { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::InvalidCharLiteral { .. } => "InvalidCharLiteral",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingElseBranch => "MissingElseBranch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidEscape { escape } => ErrorTip::Suggestion(format!(
                "Invalid escape `{}`, supported escapes are \\\\ \\\" \\' \\n \\t and \\xHH",
                escape
            )),
            ErrorImpl::UnterminatedLiteral { delimiter } => ErrorTip::Suggestion(format!(
                "Literal is missing its closing `{}` before the end of the line",
                delimiter
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::InvalidCharLiteral { literal } => ErrorTip::Suggestion(format!(
                "Char literal {} must contain exactly one character",
                literal
            )),
            ErrorImpl::UnexpectedToken { token, expected } => {
                if expected.is_empty() {
                    ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, expected one of: {}",
                        token,
                        join_kinds(expected)
                    ))
                }
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended early, expected one of: {}",
                join_kinds(expected)
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::MissingElseBranch => ErrorTip::Suggestion(String::from(
                "An `if` whose value is used needs an `else` branch",
            )),
        }
    }
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid escape sequence: {escape:?}")]
    InvalidEscape { escape: String },
    #[error("unterminated literal, missing closing {delimiter:?}")]
    UnterminatedLiteral { delimiter: char },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("char literal must hold exactly one character: {literal}")]
    InvalidCharLiteral { literal: String },

    // Parsing
    #[error("unexpected token: {token:?}, expected {expected:?}")]
    UnexpectedToken {
        token: String,
        expected: Vec<TokenKind>,
    },
    #[error("unexpected end of input, expected {expected:?}")]
    UnexpectedEndOfInput { expected: Vec<TokenKind> },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("if-expression in value position has no else branch")]
    MissingElseBranch,
}
