pub fn is_greek_char(c: char) -> bool {
    // Greek and Coptic: U+0370–U+03FF
    // Greek Extended: U+1F00–U+1FFF
    matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}')
}

/// Plain capitals Α..Ω, without tonos, dialytika or breathings
pub fn is_plain_greek_capital(c: char) -> bool {
    matches!(c, 'Α'..='Ω') && c != '\u{03A2}'
}

/// A Greek letter that isn't a plain capital: accented, archaic or Coptic forms
pub fn is_decorated_greek_letter(c: char) -> bool {
    is_greek_char(c) && c.is_alphabetic() && !is_plain_greek_capital(c)
}
