//! Character classes of the scenario grammar
//!
//! These predicates only decide whether a character may *continue* a token. Which token a
//! character *starts* is decided by the top-level dispatch in the lexer, which is stricter: it
//! also special-cases `;`, `(`, `)` and `,`. Once a text run has started those characters are
//! ordinary text.

/// Characters allowed in labels and function names.
///
/// `!` is a label character on its own, so `@!` is a call to the function named `!`.
pub fn is_label_character(c: char) -> bool {
    c == '_' || c == '!' || c.is_ascii_alphanumeric()
}

/// Characters that continue a text run: anything but label characters, `@` and newlines.
pub fn is_text_character(c: char) -> bool {
    !is_label_character(c) && c != '@' && c != '\n'
}

/// Characters that end a function parameter.
pub fn is_parameter_terminator(c: char) -> bool {
    c == ',' || c == ')' || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_characters() {
        for c in ['a', 'Z', '0', '9', '_', '!'] {
            assert!(is_label_character(c), "{:?} should be a label character", c);
        }
        for c in ['@', ';', ' ', '(', ',', 'é', 'あ', '-'] {
            assert!(!is_label_character(c), "{:?} should not be a label character", c);
        }
    }

    #[test]
    fn test_text_characters() {
        for c in [' ', '\t', '(', ')', ';', ',', 'あ', '。', '\r'] {
            assert!(is_text_character(c), "{:?} should continue text", c);
        }
        for c in ['a', '_', '!', '@', '\n'] {
            assert!(!is_text_character(c), "{:?} should end text", c);
        }
    }

    #[test]
    fn test_parameter_terminators() {
        for c in [',', ')', ' ', '\t', '\n', '\u{3000}'] {
            assert!(is_parameter_terminator(c));
        }
        for c in ['(', 'a', ';', '@'] {
            assert!(!is_parameter_terminator(c));
        }
    }
}
