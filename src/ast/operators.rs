//! Operator tags carried by AST nodes.
//!
//! Each tag maps back to the exact source symbol through `symbol()`, which
//! is also what `Display` prints.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Infix operators across the comparison, additive, multiplicative and
/// exponential levels. One `BinaryExpr` shape serves all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Comparison
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Subtype,
    // Additive
    Plus,
    Minus,
    And,
    Or,
    // Multiplicative
    Multiply,
    Divide,
    Modulo,
    // Exponential
    Power,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        let operator = match kind {
            TokenKind::Equals => BinaryOperator::Equals,
            TokenKind::NotEquals => BinaryOperator::NotEquals,
            TokenKind::Less => BinaryOperator::Less,
            TokenKind::Greater => BinaryOperator::Greater,
            TokenKind::LessEquals => BinaryOperator::LessEquals,
            TokenKind::GreaterEquals => BinaryOperator::GreaterEquals,
            TokenKind::Subtype => BinaryOperator::Subtype,
            TokenKind::Plus => BinaryOperator::Plus,
            TokenKind::Dash => BinaryOperator::Minus,
            TokenKind::Ampersand => BinaryOperator::And,
            TokenKind::Pipe => BinaryOperator::Or,
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            TokenKind::Percent => BinaryOperator::Modulo,
            TokenKind::Caret => BinaryOperator::Power,
            _ => return None,
        };

        Some(operator)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Subtype => "<:",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::And => "&",
            BinaryOperator::Or => "|",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "^",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Compound binding operators used by `UpdateExpr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Updater {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Updater {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        let updater = match kind {
            TokenKind::LeftArrow => Updater::Assign,
            TokenKind::PlusEquals => Updater::Add,
            TokenKind::MinusEquals => Updater::Subtract,
            TokenKind::StarEquals => Updater::Multiply,
            TokenKind::SlashEquals => Updater::Divide,
            TokenKind::PercentEquals => Updater::Modulo,
            TokenKind::CaretEquals => Updater::Power,
            _ => return None,
        };

        Some(updater)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Updater::Assign => "<-",
            Updater::Add => "+=",
            Updater::Subtract => "-=",
            Updater::Multiply => "*=",
            Updater::Divide => "/=",
            Updater::Modulo => "%=",
            Updater::Power => "^=",
        }
    }
}

impl Display for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Postfix symbols that take no operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixOperator {
    Dot,
    Dollar,
    Hash,
    Question,
}

impl SuffixOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Dot => Some(SuffixOperator::Dot),
            TokenKind::Dollar => Some(SuffixOperator::Dollar),
            TokenKind::Hash => Some(SuffixOperator::Hash),
            TokenKind::Question => Some(SuffixOperator::Question),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SuffixOperator::Dot => ".",
            SuffixOperator::Dollar => "$",
            SuffixOperator::Hash => "#",
            SuffixOperator::Question => "?",
        }
    }
}

impl Display for SuffixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Do,
    Scope,
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Do => write!(f, "do"),
            BlockKind::Scope => write!(f, "scope"),
        }
    }
}
