//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses precedence climbing for binary
//! operators and handles:
//!
//! - Statement lists terminated by `;` or line breaks
//! - Declarations, updates and if-expressions in statement position
//! - Calls, attribute access and suffix operators
//! - Composite literals, function definitions and blocks
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod literals;
pub mod lookups;
pub mod parser;
pub mod stmt;
