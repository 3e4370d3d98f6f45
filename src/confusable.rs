//! Latin and Greek capitals that share a glyph, and the rewriting between them

use std::collections::HashMap;
use std::sync::LazyLock;

/// Latin capital paired with the Greek capital it is visually identical to.
pub const CONFUSABLE_PAIRS: [(char, char); 14] = [
    ('A', 'Α'),
    ('B', 'Β'),
    ('E', 'Ε'),
    ('H', 'Η'),
    ('I', 'Ι'),
    ('K', 'Κ'),
    ('M', 'Μ'),
    ('N', 'Ν'),
    ('O', 'Ο'),
    ('P', 'Ρ'),
    ('T', 'Τ'),
    ('X', 'Χ'),
    ('Y', 'Υ'),
    ('Z', 'Ζ'),
];

static LATIN_TO_GREEK: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| CONFUSABLE_PAIRS.iter().copied().collect());

static GREEK_TO_LATIN: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    CONFUSABLE_PAIRS
        .iter()
        .map(|&(latin, greek)| (greek, latin))
        .collect()
});

/// Latin letters that can be written with a Greek glyph
pub fn latin_duplicates() -> impl Iterator<Item = char> {
    CONFUSABLE_PAIRS.iter().map(|&(latin, _)| latin)
}

/// Greek letters that can be written with a Latin glyph
pub fn greek_duplicates() -> impl Iterator<Item = char> {
    CONFUSABLE_PAIRS.iter().map(|&(_, greek)| greek)
}

/// Replaces every Latin duplicate-shape letter with its Greek twin.
/// Anything else, delimiters included, is copied as is.
pub fn to_greek(s: &str) -> String {
    s.chars()
        .map(|c| LATIN_TO_GREEK.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Exact inverse of [`to_greek`].
pub fn to_latin(s: &str) -> String {
    s.chars()
        .map(|c| GREEK_TO_LATIN.get(&c).copied().unwrap_or(c))
        .collect()
}
