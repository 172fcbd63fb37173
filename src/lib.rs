//! # Docmine - Russian document normalization
//!
//! Docmine turns raw Russian-language documents into a cleaned, lemmatized,
//! stop-word-free bag of words for downstream text mining (topic modeling,
//! classification, clustering).
//!
//! ## Overview
//!
//! Normalization is a single linear pass:
//!
//! 1. lowercase the document,
//! 2. strip punctuation, digits, stray single letters, Latin words and
//!    mixed Latin/Cyrillic words with an ordered list of regex rules,
//! 3. split into words,
//! 4. drop stop words,
//! 5. replace every word with its normal form,
//! 6. join the words with single spaces.
//!
//! The tokenizer, the stop-word list and the lemmatizer are pluggable
//! capabilities ([`WordTokenizer`], [`StopWordProvider`], [`Lemmatizer`]), so
//! tests and callers can swap in their own.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docmine::TextNormalizer;
//!
//! let normalizer = TextNormalizer::russian();
//! assert_eq!(normalizer.normalize("Кот сидел на окне."), "кот сидеть окно");
//! let words = normalizer.run(std::fs::File::open("article.txt")?)?;
//! ```
//!
//! With a custom form-to-lemma dictionary:
//!
//! ```rust,ignore
//! use docmine::{DictionaryLemmatizer, StopWords, TextNormalizer, UnicodeWordTokenizer};
//!
//! let normalizer = TextNormalizer::new(
//!     UnicodeWordTokenizer,
//!     StopWords::for_language("russian")?,
//!     DictionaryLemmatizer::from_file("ru_lemmas.tsv")?,
//! );
//! assert_eq!(normalizer.normalize("Кот сидел на окне."), "кот сидеть окно");
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Cleaning rules, tokenizers and stop words
//! - [`morph`] - Lemmatizers
//! - [`pipeline`] - The [`TextNormalizer`] tying the stages together
//! - [`config`] - Serializable configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod morph;
pub mod pipeline;
pub mod text;

// Re-export commonly used types
pub use config::{Config, LemmatizerConfig, LemmatizerKind, StopWordConfig, TextConfig, TokenizerKind};
pub use error::{DocmineError, Result};
pub use morph::{
    DictionaryLemmatizer, IdentityLemmatizer, Lemmatizer, MorphLemmatizer, SnowballLemmatizer,
};
pub use pipeline::TextNormalizer;
pub use text::{
    russian_stop_words, Cleaner, CleaningRule, StopWordProvider, StopWords,
    UnicodeWordTokenizer, WhitespaceTokenizer, WordTokenizer, MIXED_SCRIPT_PATTERNS,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
