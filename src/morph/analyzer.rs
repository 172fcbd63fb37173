//! Lemmatization with a full morphological analyzer.

use super::Lemmatizer;
use crate::error::{DocmineError, Result};
use log::info;
use once_cell::sync::Lazy;
use rsmorphy::{rsmorphy_dict_ru, MorphAnalyzer, Source};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// File every compiled OpenCorpora dictionary directory contains.
const DICT_META: &str = "meta.json.gz";

static RUSSIAN: Lazy<Arc<MorphAnalyzer>> = Lazy::new(|| {
    let analyzer = MorphAnalyzer::from_file(rsmorphy_dict_ru::DICT_PATH);
    info!("Loaded bundled OpenCorpora dictionary");
    Arc::new(analyzer)
});

/// Replaces each word with the normal form of its most probable parse.
///
/// Backed by `rsmorphy` and a compiled OpenCorpora dictionary. Words the
/// dictionary does not know are still parsed by suffix analogy; a word with
/// no parse at all is returned unchanged.
#[derive(Clone)]
pub struct MorphLemmatizer {
    analyzer: Arc<MorphAnalyzer>,
}

impl fmt::Debug for MorphLemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphLemmatizer").finish_non_exhaustive()
    }
}

impl Default for MorphLemmatizer {
    fn default() -> Self {
        Self::russian()
    }
}

impl MorphLemmatizer {
    /// Analyzer over the bundled Russian dictionary.
    ///
    /// The dictionary is loaded on first use and shared by every instance in
    /// the process.
    pub fn russian() -> Self {
        Self {
            analyzer: Arc::clone(&RUSSIAN),
        }
    }

    /// Loads a compiled dictionary from a directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(DocmineError::FileNotFound(dir.to_path_buf()));
        }
        if !dir.join(DICT_META).is_file() {
            return Err(DocmineError::AnalyzerUnavailable(format!(
                "{} is not a compiled morphological dictionary",
                dir.display()
            )));
        }
        let analyzer = MorphAnalyzer::from_file(dir);
        info!("Loaded morphological dictionary from {}", dir.display());
        Ok(Self {
            analyzer: Arc::new(analyzer),
        })
    }

    /// Normal form of the most probable parse, if the word has one.
    pub fn normal_form(&self, word: &str) -> Option<String> {
        let parses = self.analyzer.parse(word);
        parses
            .first()
            .map(|parsed| parsed.lex.get_normal_form(&self.analyzer).into_owned())
    }
}

impl Lemmatizer for MorphLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        self.normal_form(word).unwrap_or_else(|| word.to_string())
    }
}
