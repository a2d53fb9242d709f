//! Input decoding
//!
//! Scenario scripts are usually authored in a legacy byte encoding. The lexer only ever sees
//! decoded text, so conversion happens here, behind the [`Decode`] trait, before a
//! [`Lexer`](crate::scenario::lexing::Lexer) is built.
//!
//! Only UTF-8 ships with the crate. Legacy encodings are provided by implementing [`Decode`]
//! next to whatever codec the application already uses.

use std::borrow::Cow;

/// Conversion from raw script bytes to text. Total: every byte sequence decodes to something.
pub trait Decode {
    /// The name of this encoding (e.g., "utf-8")
    fn name(&self) -> &str;

    fn decode<'b>(&self, bytes: &'b [u8]) -> Cow<'b, str>;
}

/// UTF-8 decoding with replacement characters for invalid sequences.
///
/// A leading byte order mark is stripped so it does not become the first text token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder;

const BOM: &[u8] = b"\xEF\xBB\xBF";

impl Decode for Utf8Decoder {
    fn name(&self) -> &str {
        "utf-8"
    }

    fn decode<'b>(&self, bytes: &'b [u8]) -> Cow<'b, str> {
        let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
        String::from_utf8_lossy(bytes)
    }
}

/// Look up a decoder by encoding name.
pub fn decoder_for(name: &str) -> Option<Box<dyn Decode>> {
    match name.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => Some(Box::new(Utf8Decoder)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_borrows_valid_utf8() {
        let decoded = Utf8Decoder.decode("@fun(a)".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed("@fun(a)")));
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = b"\xEF\xBB\xBFSTART";
        assert_eq!(Utf8Decoder.decode(bytes), "START");
    }

    #[test]
    fn test_decode_replaces_invalid_bytes() {
        let bytes = b"A\xFFB";
        assert_eq!(Utf8Decoder.decode(bytes), "A\u{FFFD}B");
    }

    #[test]
    fn test_decoder_lookup() {
        assert_eq!(decoder_for("UTF-8").unwrap().name(), "utf-8");
        assert!(decoder_for("shift_jis").is_none());
    }
}
