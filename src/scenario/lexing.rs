//! Lexer
//!
//! This module turns scenario script text into a token stream.
//!
//! Structure:
//!     The lexer is a hand written state machine (see [lexer]) driven by the character classes
//! in [classification]. It is lazy: tokens are produced one at a time as the caller pulls them,
//! and nothing before the cursor is ever scanned again.
//!
//! Function Calls
//!
//!     `@name(a, b)` is the only construct with internal structure. The lexer splits it into
//!     name, start, parameters, separators and end tokens, trimming whitespace around
//!     parameters. A call written without parentheses (`@name`) still produces start and end
//!     tokens so that consumers see a single shape for every call. Nested calls and nested
//!     parentheses inside parameters are not supported.
//!
//! Errors
//!
//!     A `,` outside a parameter list and a truncated or malformed parameter list are fatal,
//!     see [error]. The input is expected to be already decoded text; see
//!     [source](crate::scenario::source) for the decoding seam.

pub mod classification;
pub mod error;
pub mod lexer;

pub use classification::{is_label_character, is_text_character};
pub use error::{LexError, MalformedFunction};
pub use lexer::Lexer;

use tracing::debug;

use crate::scenario::token::Token;

/// Lex the whole source, stopping at the first error.
///
/// The returned tokens do not include the final `EndOfFile`.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    debug!(bytes = source.len(), "lexing scenario source");
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    debug!(tokens = tokens.len(), "lexing complete");
    Ok(tokens)
}
