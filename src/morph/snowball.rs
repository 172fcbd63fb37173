//! Snowball stemming as a dictionary-free lemmatizer.

use super::Lemmatizer;
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;

/// Approximates normal forms with the Russian Snowball stemmer.
///
/// Stems are not dictionary words ("окне" becomes "окн"), but all forms of a
/// word collapse to the same stem, which is what bag-of-words models need.
/// Needs no external data.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl fmt::Debug for SnowballLemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballLemmatizer").finish_non_exhaustive()
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::russian()
    }
}

impl SnowballLemmatizer {
    /// Russian stemmer.
    pub fn russian() -> Self {
        Self::new(Algorithm::Russian)
    }

    /// Stemmer for any Snowball algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            stemmer: Stemmer::create(algorithm),
        }
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        // Snowball expects lowercase input
        let lower = word.to_lowercase();
        self.stemmer.stem(&lower).into_owned()
    }
}
