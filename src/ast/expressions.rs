use std::fmt::Display;

use crate::Span;

use super::{
    ast::{Expr, Stmt},
    operators::{BinaryOperator, BlockKind, SuffixOperator, Updater},
};

// LITERALS

/// Decoded literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Char(char),
    Boolean(bool),
}

impl Display for LiteralValue {
    /// Prints the value as source text that lexes back to the same value.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Number(value) => write!(f, "{}", value),
            LiteralValue::Boolean(value) => write!(f, "{}", value),
            LiteralValue::String(value) => {
                write!(f, "\"")?;
                for ch in value.chars() {
                    match ch {
                        '"' => write!(f, "\\\"")?,
                        _ => write_escaped(f, ch)?,
                    }
                }
                write!(f, "\"")
            }
            LiteralValue::Char(ch) => match ch {
                '\'' => write!(f, "'\\''"),
                _ => {
                    write!(f, "'")?;
                    write_escaped(f, *ch)?;
                    write!(f, "'")
                }
            },
        }
    }
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, ch: char) -> std::fmt::Result {
    match ch {
        '\\' => write!(f, "\\\\"),
        '\n' => write!(f, "\\n"),
        '\t' => write!(f, "\\t"),
        c if (c as u32) < 0x20 || c == '\x7f' => write!(f, "\\x{:02x}", c as u32),
        c => write!(f, "{}", c),
    }
}

/// Literal Expression
/// Number, string, char or boolean literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub span: Span,
}

/// Label Expression
/// A reference to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelExpr {
    pub value: String,
    pub span: Span,
}

// COMPOSITE LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct TupleExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// `set { a, b }`. Element order is display order only.
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// `map { key : value, ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct MapExpr {
    pub entries: Vec<KeyValue>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: Expr,
    pub value: Expr,
    pub span: Span,
}

/// `{ label : value, ... }`. Duplicate labels are accepted here.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpr {
    pub fields: Vec<ObjectField>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub label: String,
    pub value: Expr,
    pub span: Span,
}

// FUNCTIONS

/// Function Expression
/// `fn [name] (params) [: type] ({ block } | -> expr)`. Without a name the
/// function is an anonymous value.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Box<Expr>>,
    pub body: FunctionBody,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub label: String,
    pub explicit_type: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody {
    Block(Vec<Stmt>),
    Expression(Box<Expr>),
}

// COMPLEX

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Attribute Expression
/// Field access `base.field`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeExpr {
    pub base: Box<Expr>,
    pub field: String,
    pub span: Span,
}

/// Binary Expression
/// Comparison, additive, multiplicative and exponential operations.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Suffix Expression
#[derive(Debug, Clone, PartialEq)]
pub struct SuffixExpr {
    pub base: Box<Expr>,
    pub suffix: SuffixOperator,
    pub span: Span,
}

/// If Expression
/// A missing else branch is recorded as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Option<Box<Expr>>,
    pub span: Span,
}

/// Block Expression
/// `do { ... }` or `scope { ... }`; the last statement gives the value.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub kind: BlockKind,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Declaration Expression
/// `label : [type] = value`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationExpr {
    pub identifier: String,
    pub explicit_type: Option<Box<Expr>>,
    pub assigned_value: Box<Expr>,
    pub span: Span,
}

/// Update Expression
/// `label <updater> value`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpr {
    pub identifier: String,
    pub operator: Updater,
    pub value: Box<Expr>,
    pub span: Span,
}
