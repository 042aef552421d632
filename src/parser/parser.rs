//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from the lexer on demand, keeping the current
//! token plus one token of lookahead. Binary operators and primaries are
//! dispatched through lookup tables:
//!
//! - NUD (null denotation) handlers for primary expressions
//! - LED (left denotation) handlers for binary operators
//! - Binding powers for operator precedence

use std::{collections::HashMap, sync::Arc};

use log::debug;

use crate::{
    ast::ast::Module,
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
    stmt::parse_stmt_list,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// The token under the cursor
    current: Token,
    /// End of the most recently consumed token
    last_end: Position,
    /// Settings supplied by the caller
    config: ParserConfig,
    /// Open `( [ {` literal delimiters; line breaks are insignificant inside
    group_depth: usize,
    /// Inside a function return type, where `{` opens the function body
    in_return_type: bool,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `source` and reads its first token.
    pub fn new(source: &str, config: ParserConfig) -> Result<Self, Error> {
        let mut lexer = Lexer::with_file(source.to_string(), config.file_name());
        let current = lexer.next_token()?;
        let last_end = Position(0, lexer.file());

        Ok(Parser {
            lexer,
            current,
            last_end,
            config,
            group_depth: 0,
            in_return_type: false,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one without consuming anything.
    pub fn peek_token(&mut self) -> Result<&Token, Error> {
        self.lexer.peek()
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        let previous = std::mem::replace(&mut self.current, next);
        self.last_end = previous.span.end.clone();
        Ok(previous)
    }

    /// Expects a token of the specified kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, &[expected_kind])
    }

    /// Expects a token of the specified kind, reporting `expected` as the
    /// accepted set on failure.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        expected: &[TokenKind],
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected(expected));
        }

        self.advance()
    }

    /// Builds the error for a current token that matches none of `expected`.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        let token = &self.current;
        let expected = expected.to_vec();

        if token.kind == TokenKind::EOF {
            Error::new(
                ErrorImpl::UnexpectedEndOfInput { expected },
                token.span.start.clone(),
            )
        } else {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.describe(),
                    expected,
                },
                token.span.start.clone(),
            )
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// A line break before the current token ends the expression being
    /// parsed, unless the parser is inside a literal delimiter.
    pub fn at_line_break(&self) -> bool {
        self.group_depth == 0 && self.current.newline_before
    }

    /// Marks entry into `( [ {` delimiters of calls and literals.
    pub fn enter_group(&mut self) {
        self.group_depth += 1;
    }

    pub fn exit_group(&mut self) {
        self.group_depth = self.group_depth.saturating_sub(1);
    }

    /// Makes line breaks significant again for a statement block, returning
    /// the depth to restore afterwards.
    pub fn enter_block(&mut self) -> usize {
        std::mem::replace(&mut self.group_depth, 0)
    }

    pub fn exit_block(&mut self, saved_depth: usize) {
        self.group_depth = saved_depth;
    }

    /// Sets the return-type flag, returning the previous value.
    pub fn set_in_return_type(&mut self, value: bool) -> bool {
        std::mem::replace(&mut self.in_return_type, value)
    }

    pub fn in_return_type(&self) -> bool {
        self.in_return_type
    }

    pub fn get_config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// End of the last consumed token.
    pub fn get_last_end(&self) -> Position {
        self.last_end.clone()
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.get_last_end(),
        }
    }

    pub fn file(&self) -> Arc<String> {
        self.lexer.file()
    }
}

/// Parses one source buffer into a `Module`.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF. The
/// first error aborts the parse.
pub fn parse(source: &str, config: ParserConfig) -> Result<Module, Error> {
    let mut parser = Parser::new(source, config)?;
    create_token_lookups(&mut parser);

    let start = Position(0, parser.file());
    let body = parse_stmt_list(&mut parser, TokenKind::EOF)?;
    let end = parser.get_position();

    debug!("parsed {} top-level statements from {}", body.len(), parser.file());

    Ok(Module {
        body,
        span: Span { start, end },
    })
}
