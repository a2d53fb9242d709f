//! Lexing errors
//!
//! Both error kinds are fatal to the lexing pass: the lexer stops at the first one and keeps
//! reporting it. There is no recovery and no skipping of malformed spans.

use std::fmt;

/// What was wrong with a malformed function call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedFunction {
    /// A parameter list fragment that is neither a parameter, a separator nor `)`
    UnexpectedParameterToken,
    /// Input ended while a parameter or `)` was still expected
    MissingParameterEnd,
    /// Input ended after a parameter, where `,` or `)` was expected
    MissingSeparatorOrEnd,
}

impl fmt::Display for MalformedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedFunction::UnexpectedParameterToken => {
                write!(f, "Unexpected token in function parameter list")
            }
            MalformedFunction::MissingParameterEnd => {
                write!(f, "Malformed function: got end of buffer, expecting ')'")
            }
            MalformedFunction::MissingSeparatorOrEnd => {
                write!(f, "Malformed function: got end of buffer, expecting ',' or ')'")
            }
        }
    }
}

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A separator found where only a top-level token may start
    UnexpectedToken { found: char, offset: usize },
    /// A function call whose parameter list is truncated or invalid
    MalformedFunction {
        reason: MalformedFunction,
        offset: usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedToken { offset, .. } | LexError::MalformedFunction { offset, .. } => {
                *offset
            }
        }
    }

    /// One-based line and column (in characters) of the error within `source`.
    ///
    /// Offsets past the end of `source` are clamped to its end.
    pub fn line_column(&self, source: &str) -> (usize, usize) {
        let mut offset = self.offset().min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedToken { found, .. } => {
                write!(f, "Unexpected token {:?}", found)
            }
            LexError::MalformedFunction { reason, .. } => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for LexError {}
