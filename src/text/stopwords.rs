//! Stop-word lists and filtering.
//!
//! The Russian list is the 151-word NLTK list bundled with the crate; other
//! languages come from the `stop-words` crate. Custom lists can be given
//! inline or loaded from a file with one word per line.

use crate::error::{DocmineError, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use stop_words::{get, LANGUAGE};

const RUSSIAN_LIST: &str = include_str!("../../data/stopwords/russian.txt");

static RUSSIAN: Lazy<StopWords> = Lazy::new(|| {
    let words: Vec<&str> = RUSSIAN_LIST.lines().map(str::trim).filter(|w| !w.is_empty()).collect();
    StopWords::from_list(words.as_slice())
});

/// Answers whether a token is a stop word.
pub trait StopWordProvider: Send + Sync {
    /// Returns true if `word` should be removed.
    fn is_stop_word(&self, word: &str) -> bool;
}

/// A set of stop words, stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set. Filtering with it removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in list for a language given by name or ISO 639-1 code.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "ru" | "russian" => return Ok(russian_stop_words().clone()),
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            other => {
                return Err(DocmineError::AnalyzerUnavailable(format!(
                    "no stop-word list for language '{}'",
                    other
                )))
            }
        };
        Ok(Self::from_language(lang))
    }

    fn from_language(lang: LANGUAGE) -> Self {
        let words: HashSet<String> = get(lang).iter().map(|s| s.to_lowercase()).collect();
        info!("Loaded {} built-in stop words", words.len());
        Self { words }
    }

    /// Creates a set from a custom list.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut set = Self::empty();
        set.add(words);
        set
    }

    /// Loads stop words from a file, one per line.
    ///
    /// Surrounding whitespace is trimmed; blank lines and lines starting
    /// with `#` are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DocmineError::from_io_at(e, path))?;
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        if words.is_empty() {
            warn!("Stop-word file {} contains no words", path.display());
        } else {
            info!("Loaded {} stop words from {}", words.len(), path.display());
        }
        Ok(Self::from_list(words.as_slice()))
    }

    /// Adds words to the set.
    pub fn add<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Removes words from the set.
    pub fn remove<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Merges another set into this one.
    pub fn extend(&mut self, other: StopWords) {
        self.words.extend(other.words);
    }

    /// Checks membership of the lower-cased word.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopWordProvider for StopWords {
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// The built-in Russian list, loaded once per process.
pub fn russian_stop_words() -> &'static StopWords {
    &RUSSIAN
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_russian_stop_words() {
        let words = StopWords::for_language("russian").unwrap();

        assert!(words.contains("на"));
        assert!(words.contains("и"));
        assert!(words.contains("но"));
        assert!(words.contains("На")); // case insensitive
        assert!(!words.contains("кот"));
        assert!(!words.contains("окно"));
        assert_eq!(words.len(), 151);
    }

    #[test]
    fn test_language_code_alias() {
        assert_eq!(
            StopWords::for_language("ru").unwrap(),
            StopWords::for_language("Russian").unwrap()
        );
        assert!(StopWords::for_language("en").unwrap().contains("the"));
    }

    #[test]
    fn test_unknown_language() {
        let result = StopWords::for_language("klingon");
        assert!(matches!(result, Err(DocmineError::AnalyzerUnavailable(_))));
    }

    #[test]
    fn test_cached_russian_list() {
        let a = russian_stop_words() as *const StopWords;
        let b = russian_stop_words() as *const StopWords;
        assert_eq!(a, b);
        assert!(!russian_stop_words().is_empty());
    }

    #[test]
    fn test_custom_list() {
        let mut words = StopWords::from_list(&["Также", "вообще"]);

        assert!(words.contains("также"));
        assert!(words.contains("вообще"));
        assert!(!words.contains("на"));

        words.add(&["ещё"]);
        assert!(words.contains("ещё"));

        words.remove(&["вообще"]);
        assert!(!words.contains("вообще"));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let words = StopWords::empty();
        assert!(words.is_empty());
        assert!(!words.is_stop_word("и"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# domain stop words").unwrap();
        writeln!(file, "  рубль ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Компания").unwrap();

        let words = StopWords::from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("рубль"));
        assert!(words.contains("компания"));
    }

    #[test]
    fn test_missing_file() {
        let result = StopWords::from_file("/nonexistent/stopwords.txt");
        assert!(matches!(result, Err(DocmineError::FileNotFound(_))));
    }

    #[test]
    fn test_extend() {
        let mut words = StopWords::from_list(&["а"]);
        words.extend(StopWords::from_list(&["б"]));
        assert!(words.contains("а") && words.contains("б"));
    }
}
