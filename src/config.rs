//! Parser configuration.
//!
//! The front end has no environment- or file-based configuration; callers
//! build a `ParserConfig` and hand it to `parse`.

use std::sync::Arc;

/// Name used in positions when no file name is configured.
pub const DEFAULT_FILE_NAME: &str = "shell";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserConfig {
    /// Source name recorded in every `Position`
    pub file: Option<String>,
    /// Reject an if-expression without `else` where its value is consumed
    pub require_else_in_value_position: bool,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn require_else_in_value_position(mut self, required: bool) -> Self {
        self.require_else_in_value_position = required;
        self
    }

    pub fn file_name(&self) -> Arc<String> {
        match &self.file {
            Some(file) => Arc::new(file.clone()),
            None => Arc::new(String::from(DEFAULT_FILE_NAME)),
        }
    }
}
