//! Text processing: rule-based cleaning, word tokenization and stop words.

mod cleaner;
mod stopwords;
mod tokenizer;

pub use cleaner::{Cleaner, CleaningRule, MIXED_SCRIPT_PATTERNS};
pub use stopwords::{russian_stop_words, StopWordProvider, StopWords};
pub use tokenizer::{UnicodeWordTokenizer, WhitespaceTokenizer, WordTokenizer};
