//! Morphological normalization of tokens.
//!
//! A [`Lemmatizer`] maps a word form to its canonical dictionary form. It is
//! total: words it cannot analyze come back unchanged.

mod analyzer;
mod dictionary;
mod snowball;

pub use analyzer::MorphLemmatizer;
pub use dictionary::DictionaryLemmatizer;
pub use snowball::SnowballLemmatizer;

/// Maps a word form to its normal form.
pub trait Lemmatizer: Send + Sync {
    /// Returns the normal form of `word`, or `word` itself if unknown.
    fn lemmatize(&self, word: &str) -> String;
}

impl<F> Lemmatizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn lemmatize(&self, word: &str) -> String {
        self(word)
    }
}

/// Lemmatizer that leaves every word unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }
}
