//! Composite literals, function definitions and block expressions.
//!
//! Every comma-separated form shares one shape: zero or more
//! `element ,` followed by an optional final element without a comma.
//! Line breaks inside the delimiters are insignificant.

use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayExpr, BlockExpr, FunctionBody, FunctionExpr, KeyValue, MapExpr, ObjectExpr,
            ObjectField, Parameter, SetExpr, TupleExpr,
        },
        operators::BlockKind,
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    expr::{parse_expr, parse_stmt_expr},
    lookups::BindingPower,
    parser::Parser,
    stmt::parse_block_body,
};

/// Parses elements up to and including `close`. The opening delimiter
/// must already be consumed. Returns the elements, whether the last one
/// was followed by a comma, and the closing token.
pub fn parse_delimited<T>(
    parser: &mut Parser,
    close: TokenKind,
    mut element: impl FnMut(&mut Parser) -> Result<T, Error>,
) -> Result<(Vec<T>, bool, Token), Error> {
    parser.enter_group();
    let in_return_type = parser.set_in_return_type(false);

    let mut items = vec![];
    let mut trailing_comma = false;

    while parser.current_token_kind() != close {
        items.push(element(parser)?);

        trailing_comma = parser.current_token_kind() == TokenKind::Comma;
        if !trailing_comma {
            break;
        }
        parser.advance()?;
    }

    parser.exit_group();
    parser.set_in_return_type(in_return_type);
    let closing = parser.expect_error(close, &[TokenKind::Comma, close])?;

    Ok((items, trailing_comma, closing))
}

/// `( ... )`: the empty tuple, a tuple, or a parenthesised expression
/// when there is exactly one element and no trailing comma.
pub fn parse_tuple_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;

    let (mut elements, trailing_comma, close) = parse_delimited(parser, TokenKind::CloseParen, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;

    if elements.len() == 1 && !trailing_comma {
        if let Some(inner) = elements.pop() {
            return Ok(inner);
        }
    }

    Ok(Expr::Tuple(TupleExpr {
        elements,
        span: Span {
            start,
            end: close.span.end,
        },
    }))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span.start;

    let (elements, _, close) = parse_delimited(parser, TokenKind::CloseBracket, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;

    Ok(Expr::Array(ArrayExpr {
        elements,
        span: Span {
            start,
            end: close.span.end,
        },
    }))
}

/// `set { element, ... }`
pub fn parse_set_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Identifier)?.span.start;
    parser.expect(TokenKind::OpenCurly)?;

    let (elements, _, close) = parse_delimited(parser, TokenKind::CloseCurly, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;

    Ok(Expr::Set(SetExpr {
        elements,
        span: Span {
            start,
            end: close.span.end,
        },
    }))
}

/// `map { key : value, ... }`
pub fn parse_map_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Identifier)?.span.start;
    parser.expect(TokenKind::OpenCurly)?;

    let (entries, _, close) = parse_delimited(parser, TokenKind::CloseCurly, parse_key_value)?;

    Ok(Expr::Map(MapExpr {
        entries,
        span: Span {
            start,
            end: close.span.end,
        },
    }))
}

fn parse_key_value(parser: &mut Parser) -> Result<KeyValue, Error> {
    let key = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Colon)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(KeyValue {
        span: Span::join(key.get_span(), value.get_span()),
        key,
        value,
    })
}

/// `{ label : value, ... }`
pub fn parse_object_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let (fields, _, close) = parse_delimited(parser, TokenKind::CloseCurly, parse_object_field)?;

    Ok(Expr::Object(ObjectExpr {
        fields,
        span: Span {
            start,
            end: close.span.end,
        },
    }))
}

fn parse_object_field(parser: &mut Parser) -> Result<ObjectField, Error> {
    let label = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(ObjectField {
        span: Span {
            start: label.span.start,
            end: value.get_span().end.clone(),
        },
        label: label.value,
        value,
    })
}

/// `fn [name] ( label [: type], ... ) [: type] ({ block } | -> expr)`
pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("parse_function_expr: current token = {:?}", parser.current_token_kind());

    let start = parser.expect(TokenKind::Identifier)?.span.start;

    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(parser.advance()?.value)
    } else {
        None
    };

    parser.expect_error(
        TokenKind::OpenParen,
        &[TokenKind::Identifier, TokenKind::OpenParen],
    )?;
    let (parameters, _, _) = parse_delimited(parser, TokenKind::CloseParen, parse_parameter)?;

    // `set`, `map`, `do` and `scope` are plain labels here, so `{` opens the body
    let outer = parser.set_in_return_type(true);
    let return_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance()?;
        Some(Box::new(parse_expr(parser, BindingPower::Default)?))
    } else {
        None
    };
    parser.set_in_return_type(false);

    let body = match parser.current_token_kind() {
        TokenKind::Arrow => {
            parser.advance()?;
            FunctionBody::Expression(Box::new(parse_stmt_expr(parser, true)?))
        }
        TokenKind::OpenCurly => FunctionBody::Block(parse_block_body(parser)?),
        _ => {
            let mut expected = vec![TokenKind::Arrow, TokenKind::OpenCurly];
            if return_type.is_none() {
                expected.insert(0, TokenKind::Colon);
            }
            return Err(parser.unexpected(&expected));
        }
    };
    parser.set_in_return_type(outer);

    Ok(Expr::Function(FunctionExpr {
        name,
        parameters,
        return_type,
        body,
        span: parser.span_from(start),
    }))
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let label = parser.expect(TokenKind::Identifier)?;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance()?;
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Parameter {
        label: label.value,
        explicit_type,
        span: parser.span_from(label.span.start),
    })
}

/// `do { ... }` or `scope { ... }`
pub fn parse_block_expr(parser: &mut Parser, kind: BlockKind) -> Result<Expr, Error> {
    trace!("parse_block_expr({})", kind);

    let start = parser.expect(TokenKind::Identifier)?.span.start;
    let body = parse_block_body(parser)?;

    Ok(Expr::Block(BlockExpr {
        kind,
        body,
        span: parser.span_from(start),
    }))
}
