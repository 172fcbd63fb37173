//! Word tokenizers for cleaned text.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered sequence of words.
///
/// Implementations must preserve document order and never emit empty or
/// whitespace-only tokens.
pub trait WordTokenizer: Send + Sync {
    /// Tokenizes `text` into words.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> WordTokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Tokenizer following Unicode word boundaries (UAX #29).
///
/// Segments made only of whitespace or punctuation are dropped, and
/// apostrophes inside words (`don't`, `д'артаньян`) stay part of the word.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

/// Tokenizer that splits on runs of whitespace and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
