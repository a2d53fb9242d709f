//! Named token stream renderings
//!
//!     The binary picks one rendering by name (`--format` or `output.format`). The set of
//!     renderings is a fixed table; `--list-formats` shows it in table order.

use crate::scenario::token::Token;
use std::fmt;

use super::token_formats::{DetokenizedFormatter, JsonFormatter, SimpleFormatter, YamlFormatter};

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No rendering is registered under this name
    UnknownFormat(String),
    /// serde failed to encode the token stream
    Encode { format: &'static str, message: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "Unknown token format '{name}'"),
            FormatError::Encode { format, message } => {
                write!(f, "Cannot render tokens as {format}: {message}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a lexed token stream as text.
///
/// The slice never contains the final `EndOfFile`.
pub trait Formatter: Send + Sync {
    /// Name used on the command line and in configuration
    fn name(&self) -> &'static str;

    /// One line shown by `--list-formats`
    fn description(&self) -> &'static str;

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError>;
}

static BUILT_IN: [&dyn Formatter; 4] = [
    &SimpleFormatter,
    &JsonFormatter,
    &YamlFormatter,
    &DetokenizedFormatter,
];

/// The token renderings the binary can produce.
pub struct FormatRegistry {
    formatters: &'static [&'static dyn Formatter],
}

impl FormatRegistry {
    /// Every built-in rendering, `token-simple` first.
    pub fn with_defaults() -> Self {
        FormatRegistry {
            formatters: &BUILT_IN,
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static dyn Formatter> {
        self.formatters.iter().copied().find(|f| f.name() == name)
    }

    /// Render `tokens` with the rendering called `format`.
    pub fn serialize(&self, tokens: &[Token<'_>], format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.render(tokens),
            None => Err(FormatError::UnknownFormat(format.to_string())),
        }
    }

    /// Rendering names in listing order
    pub fn list_formats(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::lexing::tokenize;

    #[test]
    fn test_lookup_by_name() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.get("token-json").unwrap().name(), "token-json");
        assert!(registry.get("TOKEN-JSON").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_serialize_dispatches_on_name() {
        let registry = FormatRegistry::with_defaults();
        let tokens = tokenize("@wait").unwrap();
        assert_eq!(registry.serialize(&tokens, "detokenized").unwrap(), "@wait()");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        let err = registry.serialize(&[], "xml").unwrap_err();
        assert_eq!(err, FormatError::UnknownFormat("xml".to_string()));
        assert_eq!(err.to_string(), "Unknown token format 'xml'");
    }

    #[test]
    fn test_listing_order() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["token-simple", "token-json", "token-yaml", "detokenized"]
        );
        for name in registry.list_formats() {
            assert!(!registry.get(name).unwrap().description().is_empty());
        }
    }
}
