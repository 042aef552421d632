//! Error types for the Teko front end.
//!
//! This module defines the single error type shared by the lexer and the
//! parser. It includes:
//!
//! - An error structure carrying the source position
//! - Lexing variants (bad characters, escapes, unterminated literals)
//! - Parsing variants carrying the set of acceptable token kinds
//! - Human-readable tips used by `render_error`

pub mod errors;

#[cfg(test)]
mod tests;
