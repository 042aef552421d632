use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AttributeExpr, BinaryExpr, CallExpr, DeclarationExpr, IfExpr, LabelExpr, LiteralExpr,
            LiteralValue, SuffixExpr, UpdateExpr,
        },
        operators::{BinaryOperator, BlockKind, SuffixOperator, Updater},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, TokenKind},
    Span,
};

use super::{
    literals::{parse_block_expr, parse_delimited, parse_function_expr, parse_map_expr, parse_set_expr},
    lookups::{BindingPower, EXPRESSION_START},
    parser::Parser,
};

/// Precedence climbing over the binary levels. Only operators binding
/// tighter than `bp` are absorbed, so equal-precedence chains associate
/// to the left.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    trace!("parse_expr({:?}): current token = {:?}", bp, parser.current_token_kind());

    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected(EXPRESSION_START)),
    };

    let primary = nud(parser)?;
    let mut left = parse_suffix_chain(parser, primary)?;

    while !parser.at_line_break() {
        let token_kind = parser.current_token_kind();
        let (Some(&power), Some(&led)) = (
            parser.get_bp_lookup().get(&token_kind),
            parser.get_led_lookup().get(&token_kind),
        ) else {
            break;
        };

        if power <= bp {
            break;
        }

        left = led(parser, left, power)?;
    }

    Ok(left)
}

/// Statement-level expression: declaration, update or if-expression, with
/// a fallback to an ordinary expression. Declarations are tried first so
/// `label :` is never read as the start of a binary expression.
pub fn parse_stmt_expr(parser: &mut Parser, value_required: bool) -> Result<Expr, Error> {
    trace!("parse_stmt_expr: current token = {:?}", parser.current_token_kind());

    if parser.current_token_kind() == TokenKind::Identifier {
        let next_kind = parser.peek_token()?.kind;

        if next_kind == TokenKind::Colon {
            return parse_declaration_expr(parser);
        }
        if next_kind.is_updater() {
            return parse_update_expr(parser);
        }
        if parser.current_token().is_keyword(Keyword::If) {
            return parse_if_expr(parser, value_required);
        }
    }

    parse_expr(parser, BindingPower::Default)
}

/// Calls, attribute access and suffixes, applied left to right directly
/// after a primary.
pub fn parse_suffix_chain(parser: &mut Parser, mut expr: Expr) -> Result<Expr, Error> {
    loop {
        if parser.at_line_break() {
            return Ok(expr);
        }

        expr = match parser.current_token_kind() {
            TokenKind::OpenParen => parse_call_expr(parser, expr)?,
            TokenKind::Dot => {
                let next = parser.peek_token()?;
                let is_field = next.kind == TokenKind::Identifier
                    && !next.newline_before
                    && !matches!(next.keyword(), Some(Keyword::Then | Keyword::Else));
                if is_field {
                    parse_attribute_expr(parser, expr)?
                } else {
                    parse_suffix_expr(parser, expr)?
                }
            }
            TokenKind::Dollar | TokenKind::Hash | TokenKind::Question => {
                parse_suffix_expr(parser, expr)?
            }
            _ => return Ok(expr),
        };
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    let value = match token.kind {
        TokenKind::Number => match token.value.parse::<f64>() {
            // Out-of-range literals would parse to infinity
            Ok(value) if value.is_finite() => LiteralValue::Number(value),
            _ => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    parser.get_position(),
                ))
            }
        },
        TokenKind::String => LiteralValue::String(token.value.clone()),
        TokenKind::Char => match token.value.chars().next() {
            Some(ch) => LiteralValue::Char(ch),
            None => return Err(parser.unexpected(EXPRESSION_START)),
        },
        _ => return Err(parser.unexpected(EXPRESSION_START)),
    };

    Ok(Expr::Literal(LiteralExpr {
        value,
        span: parser.advance()?.span,
    }))
}

/// Labels, booleans and the keyword-led primaries.
pub fn parse_label_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.current_token().keyword();
    let opens_curly = matches!(
        keyword,
        Some(Keyword::Do | Keyword::Scope | Keyword::Set | Keyword::Map)
    ) && !parser.in_return_type()
        && parser.peek_token()?.kind == TokenKind::OpenCurly;

    match keyword {
        Some(Keyword::True) | Some(Keyword::False) => {
            let token = parser.advance()?;
            Ok(Expr::Literal(LiteralExpr {
                value: LiteralValue::Boolean(keyword == Some(Keyword::True)),
                span: token.span,
            }))
        }
        Some(Keyword::If) => parse_if_expr(parser, true),
        Some(Keyword::Fn) => parse_function_expr(parser),
        Some(Keyword::Then) | Some(Keyword::Else) => Err(parser.unexpected(EXPRESSION_START)),
        Some(Keyword::Do) if opens_curly => parse_block_expr(parser, BlockKind::Do),
        Some(Keyword::Scope) if opens_curly => parse_block_expr(parser, BlockKind::Scope),
        Some(Keyword::Set) if opens_curly => parse_set_expr(parser),
        Some(Keyword::Map) if opens_curly => parse_map_expr(parser),
        _ => {
            let token = parser.expect(TokenKind::Identifier)?;
            Ok(Expr::Label(LabelExpr {
                value: token.value,
                span: token.span,
            }))
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let Some(operator) = BinaryOperator::from_token_kind(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.describe(),
                expected: vec![],
            },
            operator_token.span.start,
        ));
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span::join(left.get_span(), right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let (arguments, _, close) = parse_delimited(parser, TokenKind::CloseParen, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: callee.get_span().start.clone(),
            end: close.span.end,
        },
        callee: Box::new(callee),
        arguments,
    }))
}

pub fn parse_attribute_expr(parser: &mut Parser, base: Expr) -> Result<Expr, Error> {
    parser.expect(TokenKind::Dot)?;
    let field = parser.expect(TokenKind::Identifier)?;

    Ok(Expr::Attribute(AttributeExpr {
        span: Span {
            start: base.get_span().start.clone(),
            end: field.span.end,
        },
        base: Box::new(base),
        field: field.value,
    }))
}

pub fn parse_suffix_expr(parser: &mut Parser, base: Expr) -> Result<Expr, Error> {
    let Some(suffix) = SuffixOperator::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected(&[
            TokenKind::Dot,
            TokenKind::Dollar,
            TokenKind::Hash,
            TokenKind::Question,
        ]));
    };
    let suffix_token = parser.advance()?;

    Ok(Expr::Suffix(SuffixExpr {
        span: Span {
            start: base.get_span().start.clone(),
            end: suffix_token.span.end,
        },
        base: Box::new(base),
        suffix,
    }))
}

/// `if cond [then] branch [else branch]`. An `else` binds to the nearest
/// open `if`.
pub fn parse_if_expr(parser: &mut Parser, value_required: bool) -> Result<Expr, Error> {
    trace!("parse_if_expr(value_required = {})", value_required);

    let start = parser.advance()?.span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token().is_keyword(Keyword::Then) {
        parser.advance()?;
    }

    let then_branch = parse_stmt_expr(parser, value_required)?;

    let else_branch = if parser.current_token().is_keyword(Keyword::Else) {
        parser.advance()?;
        Some(Box::new(parse_stmt_expr(parser, value_required)?))
    } else {
        if value_required && parser.get_config().require_else_in_value_position {
            return Err(Error::new(ErrorImpl::MissingElseBranch, start));
        }
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
        span: parser.span_from(start),
    }))
}

/// `label : [type] = value`
pub fn parse_declaration_expr(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("parse_declaration_expr: label = {:?}", parser.current_token().value);

    let label = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;

    let explicit_type = if parser.current_token_kind() == TokenKind::Assignment {
        None
    } else {
        Some(Box::new(parse_expr(parser, BindingPower::Default)?))
    };

    parser.expect(TokenKind::Assignment)?;
    let assigned_value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Declaration(DeclarationExpr {
        identifier: label.value,
        explicit_type,
        assigned_value: Box::new(assigned_value),
        span: parser.span_from(label.span.start),
    }))
}

/// `label <updater> value`
pub fn parse_update_expr(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("parse_update_expr: label = {:?}", parser.current_token().value);

    let label = parser.expect(TokenKind::Identifier)?;

    let Some(operator) = Updater::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected(&[
            TokenKind::LeftArrow,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::CaretEquals,
        ]));
    };
    parser.advance()?;

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Update(UpdateExpr {
        identifier: label.value,
        operator,
        value: Box::new(value),
        span: parser.span_from(label.span.start),
    }))
}
