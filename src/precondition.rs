//! Checks that text is uppercase and free of accents before it gets normalized.
//!
//! [`crate::normalize`] assumes its input has been uppercased and stripped of
//! diacritics. Callers that can't guarantee that run [`check`] first.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::util::greek::is_decorated_greek_letter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    Lowercase,
    /// Precomposed accent or combining mark
    Accented,
    /// Archaic, titlecase or other letters of the two scripts that aren't plain capitals
    NotPlain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputError {
    pub violation: Violation,
    pub character: char,
    /// Position in chars, not bytes
    pub position: usize,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let what = match self.violation {
            Violation::Lowercase => "lowercase letter",
            Violation::Accented => "accented letter",
            Violation::NotPlain => "letter outside the plain capitals",
        };

        write!(f, "{} '{}' at position {}", what, self.character, self.position)
    }
}

impl Error for InputError {}

/// Returns the first character that breaks the uppercase, unaccented contract.
///
/// Symbols and letters of other scripts are let through.
pub fn check(s: &str) -> Result<(), InputError> {
    for (position, character) in s.chars().enumerate() {
        let violation = if character.is_lowercase() {
            Violation::Lowercase
        } else if is_accented(character) {
            Violation::Accented
        } else if is_decorated_latin_letter(character) || is_decorated_greek_letter(character) {
            Violation::NotPlain
        } else {
            continue;
        };

        return Err(InputError {
            violation,
            character,
            position,
        });
    }

    Ok(())
}

fn is_accented(c: char) -> bool {
    is_combining_mark(c) || is_accented_greek(c) || is_accented_latin(c)
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

// Tonos and dialytika capitals, then Greek Extended (breathings, accents, iota subscript)
fn is_accented_greek(c: char) -> bool {
    matches!(
        c,
        '\u{0386}' | '\u{0388}'..='\u{038A}' | '\u{038C}' | '\u{038E}'..='\u{038F}'
            | '\u{03AA}'..='\u{03AB}' | '\u{1F00}'..='\u{1FFF}'
    ) && c.is_alphabetic()
}

// Latin-1 Supplement capitals, Latin Extended-A, Latin Extended Additional
fn is_accented_latin(c: char) -> bool {
    matches!(
        c,
        '\u{00C0}'..='\u{00D6}' | '\u{00D8}'..='\u{00DD}' | '\u{0100}'..='\u{017F}'
            | '\u{1E00}'..='\u{1EFF}'
    ) && c.is_alphabetic()
        && !matches!(c, 'Æ' | 'Ð' | 'Ĳ' | 'Ŋ' | 'Œ' | 'ẞ')
}

// Latin-1 Supplement, Latin Extended-A and -B, Latin Extended Additional
fn is_decorated_latin_letter(c: char) -> bool {
    matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}') && c.is_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(check("HELLO WORLD").is_ok());
        assert!(check("ΓΕΙΑ ΣΟΥ, 2024").is_ok());
        assert!(check("FΨAI").is_ok());
        assert!(check("").is_ok());
    }

    #[test]
    fn test_other_scripts_and_symbols_pass() {
        assert!(check("ЖУК #1 _ 東京 ×").is_ok());
    }

    #[test]
    fn test_lowercase_latin() {
        let err = check("HELlO").unwrap_err();

        assert_eq!(err.violation, Violation::Lowercase);
        assert_eq!(err.character, 'l');
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_lowercase_greek() {
        let err = check("ΓΕΙα").unwrap_err();

        assert_eq!(err.violation, Violation::Lowercase);
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_accented_greek() {
        let err = check("ΑΘΗΝΆ").unwrap_err();

        assert_eq!(err.violation, Violation::Accented);
        assert_eq!(err.character, 'Ά');
        assert_eq!(err.position, 4);

        assert!(check("ΠΡΩΤΕΥΟΥΣΑ ΚΑΙ ΪΟΝ").is_err());
    }

    #[test]
    fn test_accented_latin() {
        let err = check("CAFÉ").unwrap_err();

        assert_eq!(err.violation, Violation::Accented);
        assert_eq!(err.character, 'É');
    }

    #[test]
    fn test_accented_latin_extended_additional() {
        for (input, character) in [("ẼΛ", 'Ẽ'), ("ỲES", 'Ỳ'), ("Ạ", 'Ạ')] {
            let err = check(input).unwrap_err();

            assert_eq!(err.violation, Violation::Accented);
            assert_eq!(err.character, character);
            assert_eq!(err.position, 0);
        }
    }

    #[test]
    fn test_letters_outside_plain_capitals() {
        for c in ['Ϙ', 'ǅ', 'Æ', 'Œ', 'ẞ'] {
            let err = check(&c.to_string()).unwrap_err();

            assert_eq!(err.violation, Violation::NotPlain, "{:?}", c);
        }

        assert_eq!(
            check("Ϙ").unwrap_err().to_string(),
            "letter outside the plain capitals 'Ϙ' at position 0"
        );
    }

    #[test]
    fn test_combining_mark() {
        let err = check("CAFE\u{0301}").unwrap_err();

        assert_eq!(err.violation, Violation::Accented);
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_message() {
        let err = check("AbC").unwrap_err();

        assert_eq!(err.to_string(), "lowercase letter 'b' at position 1");
    }
}
