#![allow(clippy::module_inception)]

use std::{
    fmt::{self, Display, Write},
    sync::Arc,
};

use crate::{
    ast::ast::Module,
    config::ParserConfig,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into a source buffer, tagged with the source name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }

    pub fn offset(&self) -> usize {
        self.0 as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Covers everything from the start of `first` to the end of `last`.
    pub fn join(first: &Span, last: &Span) -> Span {
        Span {
            start: first.start.clone(),
            end: last.end.clone(),
        }
    }
}

/// Parses one module with the default configuration.
pub fn parse_source(source: &str) -> Result<Module, Error> {
    parser::parser::parse(source, ParserConfig::default())
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text (including its line
/// break) and the 0-based byte column. A position equal to the source
/// length resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
        last_line = line;
    }

    if source.is_empty() || source.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last_line.to_string(), last_line.len()))
    }
}

/// Renders an error as a caret diagnostic:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `)`, expected one of: Identifier)
/// -> main.teko
///   |
/// 2 | x : int = )
///   | ----------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();
    // Writing into a `String` never fails
    let _ = write_error(&mut out, error, source);
    out
}

/// Writes the diagnostic built by `render_error` into any `fmt::Write` sink.
pub fn write_error(out: &mut impl Write, error: &Error, source: &str) -> fmt::Result {
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "-> {}", position.1)?;

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return Ok(());
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    write!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();
    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, parse_source, render_error, write_error};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        assert_eq!(get_line_at_position("abc", 3), Some((1, "abc".to_string(), 3)));
        assert_eq!(get_line_at_position("abc\n", 4), Some((2, String::new(), 0)));
        assert_eq!(get_line_at_position("", 0), Some((1, String::new(), 0)));
        assert_eq!(get_line_at_position("abc", 4), None);
    }

    #[test]
    fn test_render_error() {
        let source = "x : int = 1\n  y <- )\n";
        let error = parse_source(source).unwrap_err();
        let rendered = render_error(&error, source);

        assert!(rendered.starts_with("Error: UnexpectedToken"));
        assert!(rendered.contains("-> shell"));
        assert!(rendered.contains("2 | y <- )"));
        assert!(rendered.ends_with("| -----^"));
    }

    #[test]
    fn test_write_error_matches_render_error() -> std::fmt::Result {
        let source = "f(1 2)";
        let error = parse_source(source).unwrap_err();

        let mut written = String::new();
        write_error(&mut written, &error, source)?;

        assert_eq!(written, render_error(&error, source));
        assert!(written.contains("1 | f(1 2)"));
        assert!(written.ends_with("| ----^"));
        Ok(())
    }
}
