//! Whole-string charset tests for uppercase, unaccented Latin and Greek text.
//!
//! The strict tests accept only the letters of one alphabet, the extended ones
//! also accept the other alphabet's letters that look the same. Delimiters
//! pass every test, so an empty or delimiter-only string is both Greek and Latin.

use std::sync::LazyLock;

use regex::Regex;

use crate::confusable::{greek_duplicates, latin_duplicates};

/// Body of a regex character class matching word delimiters:
/// whitespace, ASCII digits and `. , @ - ( ) : / & '`.
pub const DELIMITER_CLASS: &str = r" \t\n\r\x0B\x0C0-9.,@\-():/&'";

const GREEK_CAPITALS: &str = "Α-Ω";
const LATIN_CAPITALS: &str = "A-Z";

static GREEK_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| anchored_charset(GREEK_CAPITALS, ""));

static LATIN_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| anchored_charset(LATIN_CAPITALS, ""));

static GREEK_LOOKING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    anchored_charset(GREEK_CAPITALS, &latin_duplicates().collect::<String>())
});

static LATIN_LOOKING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    anchored_charset(LATIN_CAPITALS, &greek_duplicates().collect::<String>())
});

fn anchored_charset(letters: &str, lookalikes: &str) -> Regex {
    Regex::new(&format!("^[{}{}{}]*$", letters, lookalikes, DELIMITER_CLASS)).unwrap()
}

/// Same set as [`DELIMITER_CLASS`], for per-character scans.
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '\x0B'
            | '\x0C'
            | '0'..='9'
            | '.'
            | ','
            | '@'
            | '-'
            | '('
            | ')'
            | ':'
            | '/'
            | '&'
            | '\''
    )
}

/// Only Greek capitals and delimiters.
pub fn is_greek_only(s: &str) -> bool {
    GREEK_ONLY_REGEX.is_match(s)
}

/// Only Latin capitals and delimiters.
pub fn is_latin_only(s: &str) -> bool {
    LATIN_ONLY_REGEX.is_match(s)
}

/// Every character is Greek, a Latin letter with a Greek twin, or a delimiter.
pub fn can_write_greek(s: &str) -> bool {
    GREEK_LOOKING_REGEX.is_match(s)
}

/// Every character is Latin, a Greek letter with a Latin twin, or a delimiter.
pub fn can_write_latin(s: &str) -> bool {
    LATIN_LOOKING_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_only() {
        assert!(is_greek_only("ΓΕΙΑ ΣΟΥ"));
        assert!(is_greek_only("ΑΘΗΝΑ, 2004"));
        assert!(!is_greek_only("ΓΕΙA"));
        assert!(!is_greek_only("HELLO"));
    }

    #[test]
    fn test_latin_only() {
        assert!(is_latin_only("HELLO WORLD"));
        assert!(is_latin_only("O'NEIL & SONS (1999)"));
        assert!(!is_latin_only("HELLΟ"));
        assert!(!is_latin_only("ΓΕΙΑ"));
    }

    #[test]
    fn test_anchored_at_both_ends() {
        assert!(!is_latin_only("ΦABC"));
        assert!(!is_latin_only("ABCΦ"));
        assert!(!is_greek_only("FΑΒΓ"));
        assert!(!is_greek_only("ΑΒΓ\nF"));
    }

    #[test]
    fn test_empty_and_delimiters_only() {
        for s in ["", " ", "12-34", "(.,@:/&')", "\t\r\n"] {
            assert!(is_greek_only(s), "{:?}", s);
            assert!(is_latin_only(s), "{:?}", s);
            assert!(can_write_greek(s), "{:?}", s);
            assert!(can_write_latin(s), "{:?}", s);
        }
    }

    #[test]
    fn test_can_write_greek() {
        assert!(can_write_greek("ΓΕΙA ΣΟY"));
        assert!(can_write_greek("ABEHIKMNOPTXYZ"));
        assert!(!can_write_greek("ΓΕΙA F"));
        assert!(!can_write_greek("R"));
    }

    #[test]
    fn test_can_write_latin() {
        assert!(can_write_latin("HΕLLO"));
        assert!(can_write_latin("ΑΒΕΗΙΚΜΝΟΡΤΥΧΖ"));
        assert!(!can_write_latin("ΦΑ"));
        assert!(!can_write_latin("Λ"));
    }

    #[test]
    fn test_lookalikes_pass_both() {
        assert!(can_write_greek("ΚΑΤΙ KATI"));
        assert!(can_write_latin("ΚΑΤΙ KATI"));
    }

    #[test]
    fn test_foreign_characters_fail_every_test() {
        for s in ["a", "É", "Ά", "_", "#", "ß", "Ж"] {
            assert!(!is_greek_only(s), "{:?}", s);
            assert!(!is_latin_only(s), "{:?}", s);
            assert!(!can_write_greek(s), "{:?}", s);
            assert!(!can_write_latin(s), "{:?}", s);
        }
    }

    #[test]
    fn test_delimiter_scan_agrees_with_class() {
        for c in (0u32..0x0400).filter_map(char::from_u32) {
            let s = c.to_string();
            assert_eq!(
                is_delimiter(c),
                is_greek_only(&s) && is_latin_only(&s),
                "{:?}",
                c
            );
        }
    }
}
