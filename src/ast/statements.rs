use crate::Span;

use super::ast::Expr;

/// An expression in statement position. Its value may be discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `type Name = type-expression`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinitionStmt {
    pub name: String,
    pub definition: Expr,
    pub span: Span,
}
