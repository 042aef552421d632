//! Lexical analysis module.
//!
//! Converts Teko source text into a lazily produced stream of tokens. It
//! handles:
//!
//! - Labels (contextual keywords are classified later by the parser)
//! - Number, string and char literals, including escape decoding
//! - Operators and punctuation by longest match
//! - Whitespace, line comments and block comments (never emitted)
//! - Line-break tracking used for statement termination

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
