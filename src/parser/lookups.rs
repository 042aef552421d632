use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, literals::*, parser::Parser};

/// Binary precedence levels, lowest binding first. Suffixes, calls and
/// attributes bind tighter than all of these; they are handled by a loop
/// around each primary and never reach the binding power table.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comparison,
    Additive,
    Multiplicative,
    Exponential,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

/// Token kinds that can start an expression, for diagnostics.
pub const EXPRESSION_START: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Char,
    TokenKind::Identifier,
    TokenKind::OpenParen,
    TokenKind::OpenBracket,
    TokenKind::OpenCurly,
];

pub fn create_token_lookups(parser: &mut Parser) {
    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Subtype, BindingPower::Comparison, parse_binary_expr);

    // Additive
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Ampersand, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Pipe, BindingPower::Additive, parse_binary_expr);

    // Multiplicative and exponential
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::Exponential, parse_binary_expr);

    // Literals and labels
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Char, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_label_expr);

    // Composite literals
    parser.nud(TokenKind::OpenParen, parse_tuple_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_expr);
    parser.nud(TokenKind::OpenCurly, parse_object_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
