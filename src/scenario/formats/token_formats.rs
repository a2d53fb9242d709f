//! Built-in token formats

use super::registry::{FormatError, Formatter};
use crate::scenario::detokenizer::detokenize;
use crate::scenario::token::Token;

/// One `KIND("value")` per line
pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn name(&self) -> &'static str {
        "token-simple"
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in tokens {
            out.push_str(&token.to_string());
            out.push('\n');
        }
        Ok(out)
    }

    fn description(&self) -> &'static str {
        "One token per line as KIND(\"value\")"
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "token-json"
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokens).map_err(|e| FormatError::Encode {
            format: "JSON",
            message: e.to_string(),
        })
    }

    fn description(&self) -> &'static str {
        "Tokens with kinds, values and byte spans as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "token-yaml"
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        serde_yaml::to_string(tokens).map_err(|e| FormatError::Encode {
            format: "YAML",
            message: e.to_string(),
        })
    }

    fn description(&self) -> &'static str {
        "Tokens with kinds, values and byte spans as YAML"
    }
}

/// Canonical source text rebuilt from the tokens
pub struct DetokenizedFormatter;

impl Formatter for DetokenizedFormatter {
    fn name(&self) -> &'static str {
        "detokenized"
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        Ok(detokenize(tokens))
    }

    fn description(&self) -> &'static str {
        "Canonical scenario source rebuilt from the tokens"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::lexing::tokenize;

    #[test]
    fn test_simple_format() {
        let tokens = tokenize("@fun(foo)").unwrap();
        insta::assert_snapshot!(SimpleFormatter.render(&tokens).unwrap(), @r###"
        FUNCTION_NAME("fun")
        FUNCTION_PARAM_START("(")
        FUNCTION_PARAM("foo")
        FUNCTION_PARAM_END(")")
        "###);
    }

    #[test]
    fn test_json_format() {
        let tokens = tokenize("A").unwrap();
        let json = JsonFormatter.render(&tokens).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "Label");
        assert_eq!(value[0]["value"], "A");
        assert_eq!(value[0]["span"]["start"], 0);
        assert_eq!(value[0]["span"]["end"], 1);
    }

    #[test]
    fn test_yaml_format() {
        let tokens = tokenize(";hi").unwrap();
        let yaml = YamlFormatter.render(&tokens).unwrap();
        assert!(yaml.contains("kind: Comment"));
        assert!(yaml.contains("value: hi"));
    }

    #[test]
    fn test_detokenized_format() {
        let tokens = tokenize("@fun").unwrap();
        assert_eq!(DetokenizedFormatter.render(&tokens).unwrap(), "@fun()");
    }
}
