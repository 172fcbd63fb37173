//! The document normalization pipeline.
//!
//! read → lowercase → clean → tokenize → remove stop words → lemmatize → join

use crate::config::{Config, LemmatizerKind, TokenizerKind};
use crate::error::{DocmineError, Result};
use crate::morph::{
    DictionaryLemmatizer, IdentityLemmatizer, Lemmatizer, MorphLemmatizer, SnowballLemmatizer,
};
use crate::text::{
    russian_stop_words, Cleaner, StopWordProvider, StopWords, UnicodeWordTokenizer,
    WhitespaceTokenizer, WordTokenizer,
};
use log::debug;
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Turns raw documents into space-separated, lemmatized, stop-word-free text.
///
/// The normalizer holds no per-document state; the linguistic resources it
/// owns are loaded once and shared, so one instance can serve any number of
/// documents, including from several threads.
#[derive(Clone)]
pub struct TextNormalizer {
    cleaner: Cleaner,
    tokenizer: Arc<dyn WordTokenizer>,
    stop_words: Arc<dyn StopWordProvider>,
    lemmatizer: Arc<dyn Lemmatizer>,
    lowercase: bool,
    unicode_normalize: bool,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("rules", &self.cleaner.rule_names())
            .field("lowercase", &self.lowercase)
            .field("unicode_normalize", &self.unicode_normalize)
            .finish_non_exhaustive()
    }
}

impl TextNormalizer {
    /// Creates a normalizer from explicit capabilities, with the standard
    /// cleaning rules.
    pub fn new<T, S, L>(tokenizer: T, stop_words: S, lemmatizer: L) -> Self
    where
        T: WordTokenizer + 'static,
        S: StopWordProvider + 'static,
        L: Lemmatizer + 'static,
    {
        Self {
            cleaner: Cleaner::standard(),
            tokenizer: Arc::new(tokenizer),
            stop_words: Arc::new(stop_words),
            lemmatizer: Arc::new(lemmatizer),
            lowercase: true,
            unicode_normalize: true,
        }
    }

    /// Unicode tokenizer, built-in Russian stop words and the morphological
    /// analyzer over the bundled OpenCorpora dictionary.
    pub fn russian() -> Self {
        Self::new(
            UnicodeWordTokenizer,
            russian_stop_words().clone(),
            MorphLemmatizer::russian(),
        )
    }

    /// Builds a normalizer from configuration.
    ///
    /// All resources (stop-word lists, dictionaries) are loaded here, so a
    /// missing or broken resource is reported before any document is read.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let cleaner = if config.text.strict_mixed_script {
            Cleaner::strict()
        } else {
            Cleaner::standard()
        };

        let tokenizer: Arc<dyn WordTokenizer> = match config.text.tokenizer {
            TokenizerKind::Unicode => Arc::new(UnicodeWordTokenizer),
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer),
        };

        let stop_words = load_stop_words(config)?;

        let lemmatizer: Arc<dyn Lemmatizer> = match config.lemmatizer.kind {
            LemmatizerKind::Morphology => match &config.lemmatizer.dictionary {
                Some(dir) => Arc::new(MorphLemmatizer::from_dir(dir)?),
                None => Arc::new(MorphLemmatizer::russian()),
            },
            LemmatizerKind::Dictionary => {
                let path = config.lemmatizer.dictionary.as_ref().ok_or_else(|| {
                    DocmineError::Config("dictionary lemmatizer needs a dictionary path".to_string())
                })?;
                let dictionary = DictionaryLemmatizer::from_file(path)?;
                if config.lemmatizer.stem_unknown {
                    Arc::new(dictionary.with_fallback(SnowballLemmatizer::russian()))
                } else {
                    Arc::new(dictionary)
                }
            }
            LemmatizerKind::Snowball => Arc::new(SnowballLemmatizer::russian()),
            LemmatizerKind::Identity => Arc::new(IdentityLemmatizer),
        };

        Ok(Self {
            cleaner,
            tokenizer,
            stop_words: Arc::new(stop_words),
            lemmatizer,
            lowercase: config.text.lowercase,
            unicode_normalize: config.text.unicode_normalize,
        })
    }

    /// Replaces the cleaning rules.
    pub fn with_cleaner(mut self, cleaner: Cleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// The cleaning rules in use.
    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    /// Reads `reader` to the end and normalizes its contents.
    ///
    /// Input that is not valid UTF-8 is an I/O error.
    pub fn run<R: Read>(&self, mut reader: R) -> Result<String> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.normalize(&text))
    }

    /// Normalizes the contents of a file.
    ///
    /// The file is closed before processing starts.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let text = {
            let mut file = File::open(path).map_err(|e| DocmineError::from_io_at(e, path))?;
            let mut text = String::new();
            file.read_to_string(&mut text)?;
            text
        };
        Ok(self.normalize(&text))
    }

    /// Normalizes text into a single space-separated string.
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_tokens(text).join(" ")
    }

    /// Normalizes text and returns the final tokens in document order.
    pub fn normalize_tokens(&self, text: &str) -> Vec<String> {
        let cleaned = self.cleaned(text);
        let tokens = self.tokenize(&cleaned);
        let kept = self.remove_stop_words(&tokens);
        let lemmas = self.lemmatize(&kept);
        debug!(
            "Normalized {} bytes: {} tokens, {} after stop-word removal",
            text.len(),
            tokens.len(),
            lemmas.len()
        );
        lemmas
    }

    /// Normalizes independent documents in parallel, preserving input order.
    pub fn normalize_batch<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<String> {
        self.normalize_batch_with(documents, |_| {})
    }

    /// Like [`normalize_batch`](Self::normalize_batch), calling `on_done`
    /// with the index of each document as soon as it is normalized.
    ///
    /// Callbacks arrive from worker threads in completion order.
    pub fn normalize_batch_with<S, F>(&self, documents: &[S], on_done: F) -> Vec<String>
    where
        S: AsRef<str> + Sync,
        F: Fn(usize) + Sync,
    {
        documents
            .par_iter()
            .enumerate()
            .map(|(i, doc)| {
                let normalized = self.normalize(doc.as_ref());
                on_done(i);
                normalized
            })
            .collect()
    }

    /// Lowercasing and Unicode composition applied before cleaning.
    pub fn prepare(&self, text: &str) -> String {
        let text: String = if self.unicode_normalize {
            text.nfc().collect()
        } else {
            text.to_string()
        };
        if self.lowercase {
            text.to_lowercase()
        } else {
            text
        }
    }

    /// The text the tokenizer sees: [`prepare`](Self::prepare) followed by
    /// [`clean`](Self::clean).
    pub fn cleaned(&self, text: &str) -> String {
        self.clean(&self.prepare(text))
    }

    /// Applies the cleaning rules.
    pub fn clean(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    /// Splits cleaned text into words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Drops stop words, keeping the order of the rest.
    pub fn remove_stop_words(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.stop_words.is_stop_word(&token.to_lowercase()))
            .cloned()
            .collect()
    }

    /// Replaces every token with its normal form. Count and order are kept.
    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::russian()
    }
}

fn load_stop_words(config: &Config) -> Result<StopWords> {
    let settings = &config.stopwords;
    if !settings.enabled {
        return Ok(StopWords::empty());
    }

    let mut stop_words = match settings.language.as_str() {
        "" | "none" => StopWords::empty(),
        language => StopWords::for_language(language)?,
    };
    if let Some(path) = &settings.file {
        stop_words.extend(StopWords::from_file(path)?);
    }
    stop_words.add(settings.extra.as_slice());
    Ok(stop_words)
}
