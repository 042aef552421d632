use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Contextual keywords. The lexer emits these as `Identifier` tokens;
    /// the parser decides from position whether they act as keywords.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("if", Keyword::If);
        map.insert("then", Keyword::Then);
        map.insert("else", Keyword::Else);
        map.insert("fn", Keyword::Fn);
        map.insert("type", Keyword::Type);
        map.insert("do", Keyword::Do);
        map.insert("scope", Keyword::Scope);
        map.insert("set", Keyword::Set);
        map.insert("map", Keyword::Map);
        map.insert("true", Keyword::True);
        map.insert("false", Keyword::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
    Fn,
    Type,
    Do,
    Scope,
    Set,
    Map,
    True,
    False,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Char,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Subtype, // <:

    Plus,
    Dash,
    Ampersand,
    Pipe,
    Star,
    Slash,
    Percent,
    Caret,

    // Updaters
    LeftArrow, // <-
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    CaretEquals,

    // Suffixes
    Dot,
    Dollar,
    Hash,
    Question,

    Arrow, // ->
    Colon,
    Semicolon,
    Comma,
}

impl TokenKind {
    pub fn is_updater(&self) -> bool {
        matches!(
            self,
            TokenKind::LeftArrow
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::StarEquals
                | TokenKind::SlashEquals
                | TokenKind::PercentEquals
                | TokenKind::CaretEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text, or the decoded value for string and char literals
    pub value: String,
    pub span: Span,
    /// A line break (or a comment spanning one) precedes this token
    pub newline_before: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind != TokenKind::Identifier {
            return None;
        }

        RESERVED_LOOKUP.get(self.value.as_str()).copied()
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    /// Whether a `-` right after this token is the minus operator rather
    /// than the sign of a number.
    pub fn ends_value(&self) -> bool {
        match self.kind {
            TokenKind::Identifier => !matches!(
                self.keyword(),
                Some(Keyword::If | Keyword::Then | Keyword::Else)
            ),
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Char
            | TokenKind::CloseParen
            | TokenKind::CloseBracket
            | TokenKind::CloseCurly
            | TokenKind::Dot
            | TokenKind::Dollar
            | TokenKind::Hash
            | TokenKind::Question => true,
            _ => false,
        }
    }

    /// Text used when the token shows up in a diagnostic.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("end of input"),
            TokenKind::String => format!("\"{}\"", self.value),
            TokenKind::Char => format!("'{}'", self.value),
            _ => self.value.clone(),
        }
    }
}
