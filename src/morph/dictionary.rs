//! Dictionary-backed lemmatization.

use super::Lemmatizer;
use crate::error::{DocmineError, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lemmatizer backed by a word form to normal form table.
///
/// The table is read from tab-separated text, one `form<TAB>lemma` pair per
/// line, e.g. a dump of an OpenCorpora-style morphological dictionary.
/// Lookups fold case and treat "ё" as "е" when the exact form is missing.
/// Unknown words go to the fallback lemmatizer if one is set, otherwise they
/// are returned unchanged.
pub struct DictionaryLemmatizer {
    lemmas: HashMap<String, String>,
    fallback: Option<Box<dyn Lemmatizer>>,
}

impl fmt::Debug for DictionaryLemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryLemmatizer")
            .field("entries", &self.lemmas.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl DictionaryLemmatizer {
    /// Builds a dictionary from `(form, lemma)` pairs. The first pair for a
    /// form wins. Forms and lemmas are stored lower-cased.
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let mut lemmas: HashMap<String, String> = HashMap::new();
        for (form, lemma) in pairs {
            lemmas
                .entry(form.as_ref().to_lowercase())
                .or_insert_with(|| lemma.as_ref().to_lowercase());
        }
        Self {
            lemmas,
            fallback: None,
        }
    }

    /// Reads a TSV dictionary.
    ///
    /// Blank lines and lines starting with `#` are skipped. Columns after the
    /// second (e.g. grammatical tags) are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lemmas: HashMap<String, String> = HashMap::new();
        let mut duplicates = 0usize;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let form = columns.next().unwrap_or_default().trim();
            let lemma = match columns.next() {
                Some(lemma) => lemma.trim(),
                None => {
                    return Err(DocmineError::Dictionary {
                        line: i + 1,
                        message: "expected form<TAB>lemma".to_string(),
                    })
                }
            };
            if form.is_empty() || lemma.is_empty() {
                return Err(DocmineError::Dictionary {
                    line: i + 1,
                    message: "empty form or lemma".to_string(),
                });
            }

            let form = form.to_lowercase();
            if lemmas.contains_key(&form) {
                duplicates += 1;
                continue;
            }
            lemmas.insert(form, lemma.to_lowercase());
        }

        if lemmas.is_empty() {
            return Err(DocmineError::AnalyzerUnavailable(
                "lemma dictionary has no entries".to_string(),
            ));
        }
        if duplicates > 0 {
            debug!("Skipped {} duplicate dictionary forms", duplicates);
        }

        Ok(Self {
            lemmas,
            fallback: None,
        })
    }

    /// Loads a TSV dictionary from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = {
            let file = File::open(path).map_err(|e| DocmineError::from_io_at(e, path))?;
            Self::from_reader(BufReader::new(file))?
        };
        info!(
            "Loaded {} dictionary forms from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Sends words missing from the dictionary to `fallback`.
    pub fn with_fallback<L: Lemmatizer + 'static>(mut self, fallback: L) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Looks up the normal form of `word` without falling back.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        if let Some(lemma) = self.lemmas.get(word) {
            return Some(lemma.as_str());
        }
        let lower = word.to_lowercase();
        if let Some(lemma) = self.lemmas.get(&lower) {
            return Some(lemma.as_str());
        }
        if lower.contains('ё') {
            return self.lemmas.get(&lower.replace('ё', "е")).map(String::as_str);
        }
        None
    }

    /// Number of word forms in the dictionary.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        match self.lookup(word) {
            Some(lemma) => lemma.to_string(),
            None => match &self.fallback {
                Some(fallback) => fallback.lemmatize(word),
                None => word.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::SnowballLemmatizer;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn sample() -> DictionaryLemmatizer {
        DictionaryLemmatizer::from_pairs([
            ("кот", "кот"),
            ("сидел", "сидеть"),
            ("окне", "окно"),
            ("ежа", "ёж"),
        ])
    }

    #[test]
    fn test_lookup_known_forms() {
        let dict = sample();
        assert_eq!(dict.lemmatize("сидел"), "сидеть");
        assert_eq!(dict.lemmatize("окне"), "окно");
        assert_eq!(dict.lemmatize("Окне"), "окно");
    }

    #[test]
    fn test_unknown_word_is_echoed() {
        let dict = sample();
        assert_eq!(dict.lemmatize("абвгд"), "абвгд");
        assert_eq!(dict.lookup("абвгд"), None);
    }

    #[test]
    fn test_yo_folds_to_ye() {
        let dict = DictionaryLemmatizer::from_pairs([("еще", "еще")]);
        assert_eq!(dict.lemmatize("ещё"), "еще");
    }

    #[test]
    fn test_first_pair_wins() {
        let dict = DictionaryLemmatizer::from_pairs([("стали", "стать"), ("стали", "сталь")]);
        assert_eq!(dict.lemmatize("стали"), "стать");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_pairs_and_reader_fold_lemma_case_alike() {
        let from_pairs = DictionaryLemmatizer::from_pairs([("Москве", "Москва")]);
        let from_reader = DictionaryLemmatizer::from_reader(Cursor::new("Москве\tМосква\n")).unwrap();
        assert_eq!(from_pairs.lemmatize("москве"), "москва");
        assert_eq!(from_pairs.lemmatize("москве"), from_reader.lemmatize("москве"));
    }

    #[test]
    fn test_fallback_for_unknown_words() {
        let dict = sample().with_fallback(SnowballLemmatizer::russian());
        assert_eq!(dict.lemmatize("сидел"), "сидеть");
        assert_eq!(dict.lemmatize("книгами"), "книг");
    }

    #[test]
    fn test_from_reader() {
        let tsv = "# form\tlemma\n\nкошки\tкошка\tNOUN\r\nбежал\tбежать\n";
        let dict = DictionaryLemmatizer::from_reader(Cursor::new(tsv)).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lemmatize("кошки"), "кошка");
        assert_eq!(dict.lemmatize("бежал"), "бежать");
    }

    #[test]
    fn test_from_reader_rejects_missing_lemma() {
        let tsv = "кошки\tкошка\nбежал\n";
        let result = DictionaryLemmatizer::from_reader(Cursor::new(tsv));
        assert!(matches!(result, Err(DocmineError::Dictionary { line: 2, .. })));
    }

    #[test]
    fn test_from_reader_rejects_empty_dictionary() {
        let result = DictionaryLemmatizer::from_reader(Cursor::new("# nothing here\n"));
        assert!(matches!(result, Err(DocmineError::AnalyzerUnavailable(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "окнами\tокно").unwrap();
        let dict = DictionaryLemmatizer::from_file(file.path()).unwrap();
        assert_eq!(dict.lemmatize("окнами"), "окно");
    }

    #[test]
    fn test_missing_file() {
        let result = DictionaryLemmatizer::from_file("/nonexistent/lemmas.tsv");
        assert!(matches!(result, Err(DocmineError::FileNotFound(_))));
    }
}
