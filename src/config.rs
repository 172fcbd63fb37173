//! Configuration for the docmine normalization pipeline.

use crate::error::{DocmineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration for the normalization pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text cleaning and tokenization configuration.
    pub text: TextConfig,

    /// Stop-word configuration.
    pub stopwords: StopWordConfig,

    /// Lemmatizer configuration.
    pub lemmatizer: LemmatizerConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| DocmineError::from_io_at(e, path))?;
        Self::from_json_str(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the configuration is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.lemmatizer.kind == LemmatizerKind::Dictionary && self.lemmatizer.dictionary.is_none() {
            return Err(DocmineError::Config(
                "lemmatizer kind 'dictionary' requires a dictionary path".to_string(),
            ));
        }
        if self.lemmatizer.kind != LemmatizerKind::Dictionary && self.lemmatizer.stem_unknown {
            return Err(DocmineError::Config(
                "stem_unknown only applies to the dictionary lemmatizer".to_string(),
            ));
        }
        Ok(())
    }
}

/// Which word tokenizer to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Unicode (UAX #29) word boundaries.
    #[default]
    Unicode,
    /// Plain whitespace splitting.
    Whitespace,
}

/// Text cleaning configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Convert all text to lowercase before cleaning.
    /// Default: true.
    pub lowercase: bool,

    /// Apply Unicode normalization (NFC) before cleaning, so that letters
    /// written with combining marks (e.g. "й" as "и" + U+0306) match the
    /// Cyrillic character classes.
    /// Default: true.
    pub unicode_normalize: bool,

    /// Also remove words mixing Latin and Cyrillic letters in any order,
    /// not only the four interleavings of the standard rule set.
    /// Default: false.
    pub strict_mixed_script: bool,

    /// Word tokenizer.
    /// Default: unicode.
    pub tokenizer: TokenizerKind,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            unicode_normalize: true,
            strict_mixed_script: false,
            tokenizer: TokenizerKind::Unicode,
        }
    }
}

/// Stop-word configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopWordConfig {
    /// Remove stop words at all.
    /// Default: true.
    pub enabled: bool,

    /// Language of the built-in stop-word list. Empty or "none" disables
    /// the built-in list.
    /// Default: "russian".
    pub language: String,

    /// Additional stop words.
    /// Default: empty.
    pub extra: Vec<String>,

    /// File with additional stop words, one per line.
    /// Default: None.
    pub file: Option<PathBuf>,
}

impl Default for StopWordConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "russian".to_string(),
            extra: Vec::new(),
            file: None,
        }
    }
}

/// Which lemmatizer to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    /// Morphological analyzer over a compiled OpenCorpora dictionary.
    #[default]
    Morphology,
    /// Form-to-lemma dictionary loaded from a TSV file.
    Dictionary,
    /// Russian Snowball stemmer.
    Snowball,
    /// Leave tokens unchanged.
    Identity,
}

/// Lemmatizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LemmatizerConfig {
    /// Lemmatizer kind.
    /// Default: morphology.
    pub kind: LemmatizerKind,

    /// Path of the `form<TAB>lemma` dictionary for the dictionary kind, or
    /// of a compiled dictionary directory for the morphology kind (the
    /// bundled Russian dictionary when unset).
    /// Default: None.
    pub dictionary: Option<PathBuf>,

    /// Stem words missing from the dictionary instead of echoing them.
    /// Default: false.
    pub stem_unknown: bool,
}
