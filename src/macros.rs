//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for a fixed symbol

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
/// * `$newline_before` - Whether a line break preceded the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span, false);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr, $newline_before:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
            newline_before: $newline_before,
        }
    };
}

/// Creates a lexer handler for a fixed operator or punctuation symbol.
///
/// The generated handler emits a token of the given kind and advances the
/// lexer by the symbol's length.
///
/// # Example
///
/// ```ignore
/// pattern(r"^\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+="))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer,
         _matched: &str|
         -> Result<Option<$crate::lexer::tokens::Token>, $crate::errors::errors::Error> {
            Ok(Some(lexer.emit($kind, String::from($value), $value.len())))
        }
    };
}
