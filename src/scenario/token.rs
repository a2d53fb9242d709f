//! Token types produced by the scenario lexer.
//!
//!     A scenario script is a flat sequence of fragments: labels, free text, line comments and
//!     inline function calls. The lexer never builds nesting, so a token is just a kind and a
//!     slice of the input.
//!
//! Borrowed Values
//!
//!     Token values are views into the source string the lexer was built over. Nothing is copied
//!     and a value never crosses a token boundary, so the byte range in `span` always satisfies
//!     `&source[span] == value` for tokens that come from the input.
//!
//! Synthetic Tokens
//!
//!     Function calls are normalized: every call is observed as `FunctionName`,
//!     `FunctionParamStart`, any parameters and separators, then `FunctionParamEnd`, even when
//!     the source omits the parentheses. Tokens standing in for missing parentheses, and the
//!     `EndOfFile` marker, have no source text. They carry static values (`"("`, `")"` and `""`)
//!     and an empty span at the position where they were produced.

use std::fmt;
use std::ops::Range;

/// The kind of a scenario token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TokenKind {
    /// Free text: a run of anything that is not a label character, `@` or a newline
    Text,
    /// A `;` line comment, without the `;` and the newline
    Comment,
    /// An identifier made of letters, digits, `_` and `!`
    Label,
    /// The name following `@`, possibly empty
    FunctionName,
    /// The `(` opening a parameter list, real or synthetic
    FunctionParamStart,
    /// A single parameter value, never empty and never containing whitespace
    FunctionParam,
    /// The `,` between two parameters
    FunctionParamSeparator,
    /// The `)` closing a parameter list, real or synthetic
    FunctionParamEnd,
    /// End of input. Repeats once reached.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Text => "TEXT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Label => "LABEL",
            TokenKind::FunctionName => "FUNCTION_NAME",
            TokenKind::FunctionParamStart => "FUNCTION_PARAM_START",
            TokenKind::FunctionParam => "FUNCTION_PARAM",
            TokenKind::FunctionParamSeparator => "FUNCTION_PARAM_SEPARATOR",
            TokenKind::FunctionParamEnd => "FUNCTION_PARAM_END",
            TokenKind::EndOfFile => "END_OF_FILE",
        };
        write!(f, "{}", name)
    }
}

/// A single token: its kind, the borrowed text and where that text sits in the source.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    /// Byte range of `value` in the source. Empty for synthetic tokens.
    pub span: Range<usize>,
}

impl<'a> Token<'a> {
    /// Build a token over `source[span]`. `value` must be exactly that slice.
    pub(crate) fn new(kind: TokenKind, value: &'a str, span: Range<usize>) -> Self {
        debug_assert_eq!(value.len(), span.len(), "span must cover the token value");
        Token { kind, value, span }
    }

    /// Build a token with a static value and no source text at `offset`.
    pub(crate) fn synthetic(kind: TokenKind, value: &'static str, offset: usize) -> Self {
        Token {
            kind,
            value,
            span: offset..offset,
        }
    }

    pub fn end_of_file(offset: usize) -> Self {
        Self::synthetic(TokenKind::EndOfFile, "", offset)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// True when the value was not read from the source.
    ///
    /// Only the parenthesis kinds and `EndOfFile` can be synthetic; an empty function name or
    /// comment still comes from the source even though its span is empty.
    pub fn is_synthetic(&self) -> bool {
        match self.kind {
            TokenKind::FunctionParamStart | TokenKind::FunctionParamEnd => self.span.is_empty(),
            TokenKind::EndOfFile => true,
            _ => false,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Label.to_string(), "LABEL");
        assert_eq!(
            TokenKind::FunctionParamSeparator.to_string(),
            "FUNCTION_PARAM_SEPARATOR"
        );
        assert_eq!(TokenKind::EndOfFile.to_string(), "END_OF_FILE");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Comment, "hello", 1..6);
        assert_eq!(token.to_string(), "COMMENT(\"hello\")");
    }

    #[test]
    fn test_synthetic_tokens() {
        let fake = Token::synthetic(TokenKind::FunctionParamStart, "(", 4);
        assert!(fake.is_synthetic());
        assert_eq!(fake.span, 4..4);

        let real = Token::new(TokenKind::FunctionParamStart, "(", 4..5);
        assert!(!real.is_synthetic());

        let empty_name = Token::new(TokenKind::FunctionName, "", 1..1);
        assert!(!empty_name.is_synthetic());

        assert!(Token::end_of_file(0).is_synthetic());
        assert!(Token::end_of_file(0).is_eof());
    }
}
