//! Normalizes uppercase text that mixes look-alike Latin and Greek capitals
//! (Latin `A` and Greek `Α`, say) into a single charset, so two renderings of
//! the same word compare equal.
//!
//! ```
//! use debilinguify::{normalize, Bias};
//!
//! assert_eq!(normalize("HΕLLΟ WORLD", Bias::Greek), "HELLO WORLD");
//! assert_eq!(normalize("ΓΕΙA ΣΟY", Bias::Greek), "ΓΕΙΑ ΣΟΥ");
//! assert_eq!(normalize("FΨAI", Bias::Greek), "FΨΑΙ");
//! assert_eq!(normalize("FΨAI", Bias::Neutral), "FΨAI");
//! ```

pub mod charset;
pub mod config;
pub mod confusable;
pub mod normalizer;
pub mod precondition;
pub mod util;

pub use charset::{can_write_greek, can_write_latin, is_delimiter, is_greek_only, is_latin_only};
pub use confusable::{to_greek, to_latin};
pub use normalizer::{normalize, split_words, Bias};
