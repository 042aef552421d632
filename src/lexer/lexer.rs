use std::sync::Arc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    config::DEFAULT_FILE_NAME,
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Handles a pattern match at the cursor. Returns `None` for skipped input.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).unwrap(),
        handler,
    }
}

lazy_static! {
    // Tried in order; multi-character symbols precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\s+", skip_handler),
        pattern(r"^//[^\n]*", skip_handler),
        pattern(r"^/\*(?s:.*?)\*/", skip_handler),
        pattern(r"^/\*", unterminated_comment_handler),
        pattern(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern(r"^-?[0-9]+(\.[0-9]+)?", number_handler),
        pattern(r#"^"(?:[^"\\\n]|\\[^\n])*""#, string_handler),
        pattern(r#"^""#, unterminated_literal_handler),
        pattern(r"^'(?:[^'\\\n]|\\[^\n])*'", char_handler),
        pattern(r"^'", unterminated_literal_handler),
        pattern(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern(r"^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern(r"^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern(r"^<:", MK_DEFAULT_HANDLER!(TokenKind::Subtype, "<:")),
        pattern(r"^<-", MK_DEFAULT_HANDLER!(TokenKind::LeftArrow, "<-")),
        pattern(r"^->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->")),
        pattern(r"^\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        pattern(r"^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        pattern(r"^\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=")),
        pattern(r"^/=", MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=")),
        pattern(r"^%=", MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=")),
        pattern(r"^\^=", MK_DEFAULT_HANDLER!(TokenKind::CaretEquals, "^=")),
        pattern(r"^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(r"^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern(r"^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
        pattern(r"^\^", MK_DEFAULT_HANDLER!(TokenKind::Caret, "^")),
        pattern(r"^&", MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&")),
        pattern(r"^\|", MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|")),
        pattern(r"^\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern(r"^\$", MK_DEFAULT_HANDLER!(TokenKind::Dollar, "$")),
        pattern(r"^#", MK_DEFAULT_HANDLER!(TokenKind::Hash, "#")),
        pattern(r"^\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        pattern(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
    ];
}

/// Pull-based tokenizer over one source buffer.
///
/// The cursor only moves forward. `peek` buffers a single token so the
/// parser can look one token past its current one.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Arc<String>,
    peeked: Option<Token>,
    newline_pending: bool,
    last_ends_value: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = match file {
            Some(file) => Arc::new(file),
            None => Arc::new(String::from(DEFAULT_FILE_NAME)),
        };

        Lexer::with_file(source, file_name)
    }

    pub fn with_file(source: String, file: Arc<String>) -> Lexer {
        Lexer {
            source,
            pos: 0,
            file,
            peeked: None,
            newline_pending: false,
            last_ends_value: false,
        }
    }

    /// Returns the next token, or an `EOF` token once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lex_token(),
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token, Error> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lex_token()?,
        };

        Ok(self.peeked.insert(token))
    }

    pub fn file(&self) -> Arc<String> {
        Arc::clone(&self.file)
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Builds a token of `len` bytes at the cursor and moves past it.
    pub fn emit(&mut self, kind: TokenKind, value: String, len: usize) -> Token {
        let token = MK_TOKEN!(
            kind,
            value,
            Span {
                start: self.position(),
                end: Position((self.pos + len) as u32, Arc::clone(&self.file)),
            },
            self.newline_pending
        );

        self.advance_n(len);
        self.newline_pending = false;
        self.last_ends_value = token.ends_value();
        token
    }

    fn lex_token(&mut self) -> Result<Token, Error> {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                let matched = match pattern.regex.find(self.remainder()) {
                    Some(found) => found.as_str().to_string(),
                    None => continue,
                };

                if let Some(token) = (pattern.handler)(self, &matched)? {
                    trace!("lexed {:?} {:?} at {}", token.kind, token.value, token.span.start.0);
                    return Ok(token);
                }

                continue 'scan;
            }

            let token = self.remainder().chars().next().map(String::from).unwrap_or_default();
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken { token },
                self.position(),
            ));
        }

        Ok(MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span {
                start: self.position(),
                end: self.position(),
            },
            self.newline_pending
        ))
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    // A line break ends the previous statement, so a following `-N` is a sign
    if matched.contains('\n') {
        lexer.newline_pending = true;
        lexer.last_ends_value = false;
    }

    lexer.advance_n(matched.len());
    Ok(None)
}

fn unterminated_comment_handler(lexer: &mut Lexer, _matched: &str) -> Result<Option<Token>, Error> {
    Err(Error::new(ErrorImpl::UnterminatedComment, lexer.position()))
}

fn unterminated_literal_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let delimiter = matched.chars().next().unwrap_or('"');
    Err(Error::new(
        ErrorImpl::UnterminatedLiteral { delimiter },
        lexer.position(),
    ))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    Ok(Some(lexer.emit(TokenKind::Identifier, matched.to_string(), matched.len())))
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    // `a-1` is a subtraction, not `a` followed by `-1`
    if matched.starts_with('-') && lexer.last_ends_value {
        return Ok(Some(lexer.emit(TokenKind::Dash, String::from("-"), 1)));
    }

    Ok(Some(lexer.emit(TokenKind::Number, matched.to_string(), matched.len())))
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let body = &matched[1..matched.len() - 1];
    let value = decode_escapes(body, lexer.pos + 1, &lexer.file)?;

    Ok(Some(lexer.emit(TokenKind::String, value, matched.len())))
}

fn char_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let body = &matched[1..matched.len() - 1];
    let value = decode_escapes(body, lexer.pos + 1, &lexer.file)?;

    if value.chars().count() != 1 {
        return Err(Error::new(
            ErrorImpl::InvalidCharLiteral {
                literal: matched.to_string(),
            },
            lexer.position(),
        ));
    }

    Ok(Some(lexer.emit(TokenKind::Char, value, matched.len())))
}

/// Decodes `\\ \" \' \n \t \xHH` inside a literal body starting at byte
/// `offset` of the source.
pub fn decode_escapes(body: &str, offset: usize, file: &Arc<String>) -> Result<String, Error> {
    let mut result = String::new();
    let mut chars = body.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let invalid = |escape: String| {
            Error::new(
                ErrorImpl::InvalidEscape { escape },
                Position((offset + index) as u32, Arc::clone(file)),
            )
        };

        match chars.next() {
            Some((_, '\\')) => result.push('\\'),
            Some((_, '"')) => result.push('"'),
            Some((_, '\'')) => result.push('\''),
            Some((_, 'n')) => result.push('\n'),
            Some((_, 't')) => result.push('\t'),
            Some((_, 'x')) => {
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some((_, digit)) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 => result.push(byte as char),
                    _ => return Err(invalid(format!("\\x{}", hex))),
                }
            }
            Some((_, other)) => return Err(invalid(format!("\\{}", other))),
            None => return Err(invalid(String::from("\\"))),
        }
    }

    Ok(result)
}

/// Lexes a whole buffer. The returned vector always ends with `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
