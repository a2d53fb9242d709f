//! Detokenizer for the scenario format
//!
//! This module converts a stream of tokens back into source text. The output is canonical
//! rather than byte identical: function calls always get explicit parentheses, parameters are
//! written without surrounding whitespace and comments always end with a newline. Lexing the
//! output again yields the same kinds and values.

use crate::scenario::token::{Token, TokenKind};

/// Trait for converting a token to its source representation
pub trait ToScenarioString {
    fn to_scenario_string(&self) -> String;
}

impl ToScenarioString for Token<'_> {
    fn to_scenario_string(&self) -> String {
        match self.kind {
            TokenKind::Comment => format!(";{}\n", self.value),
            TokenKind::FunctionName => format!("@{}", self.value),
            TokenKind::FunctionParamStart => "(".to_string(),
            TokenKind::FunctionParamSeparator => ",".to_string(),
            TokenKind::FunctionParamEnd => ")".to_string(),
            TokenKind::EndOfFile => String::new(),
            TokenKind::Text | TokenKind::Label | TokenKind::FunctionParam => self.value.to_string(),
        }
    }
}

/// Separator needed between two adjacent tokens so they lex apart again
fn separator(previous: TokenKind, next: TokenKind) -> Option<char> {
    match (previous, next) {
        (TokenKind::Label, TokenKind::Label) => Some(' '),
        // A text run only ends at a label character, `@` or a newline.
        (TokenKind::Text, TokenKind::Label | TokenKind::FunctionName | TokenKind::EndOfFile) => None,
        (TokenKind::Text, _) => Some('\n'),
        _ => None,
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token<'_>]) -> String {
    let mut result = String::new();
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        if let Some(c) = previous.and_then(|p| separator(p, token.kind)) {
            result.push(c);
        }
        result.push_str(&token.to_scenario_string());
        previous = Some(token.kind);
    }

    result
}
