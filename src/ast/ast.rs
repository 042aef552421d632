use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    slice::Iter,
};

use crate::Span;

use super::{
    expressions::{
        ArrayExpr, AttributeExpr, BinaryExpr, BlockExpr, CallExpr, DeclarationExpr,
        FunctionBody, FunctionExpr, IfExpr, LabelExpr, LiteralExpr, MapExpr, ObjectExpr, SetExpr,
        SuffixExpr, TupleExpr, UpdateExpr,
    },
    statements::{ExpressionStmt, TypeDefinitionStmt},
};

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    TypeDefinitionStmt,
}

/// A statement in a module or block body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    TypeDefinition(TypeDefinitionStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::TypeDefinition(_) => StmtType::TypeDefinitionStmt,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::TypeDefinition(stmt) => &stmt.span,
        }
    }

    /// The wrapped expression, for expression statements.
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Stmt::Expression(stmt) => Some(&stmt.expression),
            Stmt::TypeDefinition(_) => None,
        }
    }
}

/// Expression Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Label,
    Tuple,
    Array,
    Set,
    Map,
    Object,
    Function,
    Call,
    Attribute,
    Binary,
    Suffix,
    If,
    Block,
    Declaration,
    Update,
}

/// An expression node. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Label(LabelExpr),
    Tuple(TupleExpr),
    Array(ArrayExpr),
    Set(SetExpr),
    Map(MapExpr),
    Object(ObjectExpr),
    Function(FunctionExpr),
    Call(CallExpr),
    Attribute(AttributeExpr),
    Binary(BinaryExpr),
    Suffix(SuffixExpr),
    If(IfExpr),
    Block(BlockExpr),
    Declaration(DeclarationExpr),
    Update(UpdateExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Label(_) => ExprType::Label,
            Expr::Tuple(_) => ExprType::Tuple,
            Expr::Array(_) => ExprType::Array,
            Expr::Set(_) => ExprType::Set,
            Expr::Map(_) => ExprType::Map,
            Expr::Object(_) => ExprType::Object,
            Expr::Function(_) => ExprType::Function,
            Expr::Call(_) => ExprType::Call,
            Expr::Attribute(_) => ExprType::Attribute,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Suffix(_) => ExprType::Suffix,
            Expr::If(_) => ExprType::If,
            Expr::Block(_) => ExprType::Block,
            Expr::Declaration(_) => ExprType::Declaration,
            Expr::Update(_) => ExprType::Update,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(expr) => &expr.span,
            Expr::Label(expr) => &expr.span,
            Expr::Tuple(expr) => &expr.span,
            Expr::Array(expr) => &expr.span,
            Expr::Set(expr) => &expr.span,
            Expr::Map(expr) => &expr.span,
            Expr::Object(expr) => &expr.span,
            Expr::Function(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Attribute(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Suffix(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
            Expr::Block(expr) => &expr.span,
            Expr::Declaration(expr) => &expr.span,
            Expr::Update(expr) => &expr.span,
        }
    }
}

/// Root of a parsed source buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Module {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// Canonical S-expression rendering. Source positions are left out, so two
// trees render the same exactly when they have the same structure.

fn write_each<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> FmtResult {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

fn write_optional<T: Display>(f: &mut Formatter<'_>, item: &Option<T>) -> FmtResult {
    match item {
        Some(item) => write!(f, " {}", item),
        None => write!(f, " _"),
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Expr::Literal(expr) => write!(f, "{}", expr.value),
            Expr::Label(expr) => write!(f, "{}", expr.value),
            Expr::Tuple(expr) => {
                write!(f, "(tuple")?;
                write_each(f, &expr.elements)?;
                write!(f, ")")
            }
            Expr::Array(expr) => {
                write!(f, "(array")?;
                write_each(f, &expr.elements)?;
                write!(f, ")")
            }
            Expr::Set(expr) => {
                write!(f, "(set")?;
                write_each(f, &expr.elements)?;
                write!(f, ")")
            }
            Expr::Map(expr) => {
                write!(f, "(map")?;
                for entry in &expr.entries {
                    write!(f, " ({} {})", entry.key, entry.value)?;
                }
                write!(f, ")")
            }
            Expr::Object(expr) => {
                write!(f, "(object")?;
                for field in &expr.fields {
                    write!(f, " ({} {})", field.label, field.value)?;
                }
                write!(f, ")")
            }
            Expr::Function(expr) => {
                write!(f, "(fn")?;
                write_optional(f, &expr.name)?;
                write!(f, " (")?;
                for (index, parameter) in expr.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    match &parameter.explicit_type {
                        Some(explicit_type) => write!(f, "({} {})", parameter.label, explicit_type)?,
                        None => write!(f, "{}", parameter.label)?,
                    }
                }
                write!(f, ")")?;
                write_optional(f, &expr.return_type)?;
                match &expr.body {
                    FunctionBody::Block(body) => {
                        write!(f, " (block")?;
                        write_each(f, body)?;
                        write!(f, "))")
                    }
                    FunctionBody::Expression(body) => write!(f, " {})", body),
                }
            }
            Expr::Call(expr) => {
                write!(f, "(call {}", expr.callee)?;
                write_each(f, &expr.arguments)?;
                write!(f, ")")
            }
            Expr::Attribute(expr) => write!(f, "(attr {} {})", expr.base, expr.field),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.operator, expr.left, expr.right),
            Expr::Suffix(expr) => write!(f, "(suffix {} {})", expr.suffix, expr.base),
            Expr::If(expr) => {
                write!(f, "(if {} {}", expr.condition, expr.then_branch)?;
                if let Some(else_branch) = &expr.else_branch {
                    write!(f, " {}", else_branch)?;
                }
                write!(f, ")")
            }
            Expr::Block(expr) => {
                write!(f, "({}", expr.kind)?;
                write_each(f, &expr.body)?;
                write!(f, ")")
            }
            Expr::Declaration(expr) => {
                write!(f, "(decl {}", expr.identifier)?;
                write_optional(f, &expr.explicit_type)?;
                write!(f, " {})", expr.assigned_value)
            }
            Expr::Update(expr) => write!(f, "({} {} {})", expr.operator, expr.identifier, expr.value),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt.expression),
            Stmt::TypeDefinition(stmt) => write!(f, "(type {} {})", stmt.name, stmt.definition),
        }
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, stmt) in self.body.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
