//! Rewrites mixed Latin/Greek capitals into a single charset

use std::fmt::{Display, Formatter};

use serde_derive::{Deserialize, Serialize};

use crate::charset::{can_write_greek, can_write_latin, is_delimiter, is_greek_only, is_latin_only};
use crate::confusable::{to_greek, to_latin};

/// Which charset wins when a single word can't be written in just one of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Bias {
    #[default]
    Greek,
    Latin,
    /// Leave such words as they are
    Neutral,
}

impl Bias {
    /// Parses a bias name. Anything but `greek` or `latin` means [`Bias::Neutral`].
    pub fn from_name(name: &str) -> Bias {
        let name = name.trim();

        if name.eq_ignore_ascii_case("greek") {
            Bias::Greek
        } else if name.eq_ignore_ascii_case("latin") {
            Bias::Latin
        } else {
            Bias::Neutral
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Bias::Greek => "greek",
            Bias::Latin => "latin",
            Bias::Neutral => "none",
        }
    }

    fn apply(&self, word: &str) -> String {
        match self {
            Bias::Greek => to_greek(word),
            Bias::Latin => to_latin(word),
            Bias::Neutral => word.to_string(),
        }
    }
}

impl From<&str> for Bias {
    fn from(name: &str) -> Self {
        Bias::from_name(name)
    }
}

impl From<String> for Bias {
    fn from(name: String) -> Self {
        Bias::from_name(&name)
    }
}

impl From<Bias> for String {
    fn from(bias: Bias) -> Self {
        bias.name().to_string()
    }
}

impl Display for Bias {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalizes uppercase, unaccented Latin/Greek text into one charset.
///
/// Text that is already pure is returned as is. Text that can be written with
/// Greek letters alone is rewritten to Greek, and failing that, text that can be
/// written with Latin letters alone is rewritten to Latin. Anything else is
/// split into words that are normalized one by one; `bias` decides what happens
/// to a single word mixing letters that exist in only one of the alphabets.
///
/// Lowercase or accented input is not corrected here, see
/// [`crate::precondition::check`].
pub fn normalize(input: &str, bias: Bias) -> String {
    if is_greek_only(input) || is_latin_only(input) {
        input.to_string()
    } else if can_write_greek(input) {
        to_greek(input)
    } else if can_write_latin(input) {
        to_latin(input)
    } else {
        normalize_words(input, bias)
    }
}

fn normalize_words(input: &str, bias: Bias) -> String {
    let words = split_words(input);

    if let [word] = words.as_slice() {
        return bias.apply(word);
    }

    words.into_iter().map(|word| normalize(word, bias)).collect()
}

/// Cuts the text right after every delimiter. Consecutive delimiters give
/// delimiter-only chunks, and the chunks concatenate back to `input`.
pub fn split_words(input: &str) -> Vec<&str> {
    input.split_inclusive(is_delimiter).collect()
}
