use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{ExpressionStmt, TypeDefinitionStmt},
    },
    errors::errors::Error,
    lexer::tokens::{Keyword, TokenKind},
};

use super::{
    expr::{parse_expr, parse_stmt_expr},
    lookups::BindingPower,
    parser::Parser,
};

/// Parses statements until `close` is the current token. `close` itself is
/// left for the caller to consume.
pub fn parse_stmt_list(parser: &mut Parser, close: TokenKind) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    loop {
        while parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance()?;
        }

        if parser.current_token_kind() == close {
            return Ok(body);
        }

        if !parser.has_tokens() {
            return Err(parser.unexpected(&[close]));
        }

        body.push(parse_stmt(parser, close)?);
    }
}

pub fn parse_stmt(parser: &mut Parser, close: TokenKind) -> Result<Stmt, Error> {
    trace!("parse_stmt: current token = {:?}", parser.current_token_kind());

    let stmt = if is_type_definition(parser)? {
        parse_type_definition_stmt(parser)?
    } else {
        let expression = parse_stmt_expr(parser, false)?;
        Stmt::Expression(ExpressionStmt {
            span: expression.get_span().clone(),
            expression,
        })
    };

    parse_terminator(parser, close)?;

    Ok(stmt)
}

fn is_type_definition(parser: &mut Parser) -> Result<bool, Error> {
    if !parser.current_token().is_keyword(Keyword::Type) {
        return Ok(false);
    }

    let next = parser.peek_token()?;
    Ok(next.kind == TokenKind::Identifier && !next.newline_before)
}

/// `type Name = type-expression`
pub fn parse_type_definition_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance()?.span.start;
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let definition = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::TypeDefinition(TypeDefinitionStmt {
        name,
        definition,
        span: parser.span_from(start),
    }))
}

/// A statement ends at `;`, a line break, the enclosing `close` or the end
/// of input. Only `;` is consumed.
fn parse_terminator(parser: &mut Parser, close: TokenKind) -> Result<(), Error> {
    let token = parser.current_token();

    if token.kind == TokenKind::Semicolon {
        parser.advance()?;
        return Ok(());
    }

    if token.kind == close || token.kind == TokenKind::EOF || token.newline_before {
        return Ok(());
    }

    Err(parser.unexpected(&[TokenKind::Semicolon, close]))
}

/// `{ statement* }` with line breaks significant inside, even when the
/// block itself sits inside a literal or argument list.
pub fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let saved_depth = parser.enter_block();
    let body = parse_stmt_list(parser, TokenKind::CloseCurly);
    parser.exit_block(saved_depth);
    let body = body?;

    parser.expect(TokenKind::CloseCurly)?;

    trace!("parse_block_body: {} statements", body.len());
    Ok(body)
}
