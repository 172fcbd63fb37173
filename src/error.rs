//! Error types for the docmine text normalization pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for docmine operations.
///
/// Cleaning, tokenization, stop-word filtering and lemmatization are total
/// functions and never produce one of these; errors come only from reading
/// documents and from initializing linguistic resources.
#[derive(Error, Debug)]
pub enum DocmineError {
    /// I/O error while reading a document or resource.
    ///
    /// Input that is not valid UTF-8 is reported here with kind `InvalidData`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A lemmatizer or stop-word resource could not be initialized.
    #[error("Analyzer unavailable: {0}")]
    AnalyzerUnavailable(String),

    /// Malformed entry in a lemma dictionary.
    #[error("Dictionary error at line {line}: {message}")]
    Dictionary {
        /// 1-based line number of the offending entry.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for docmine operations.
pub type Result<T> = std::result::Result<T, DocmineError>;

impl DocmineError {
    /// Maps a `NotFound` I/O error on `path` to [`DocmineError::FileNotFound`].
    pub fn from_io_at(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            DocmineError::FileNotFound(path.to_path_buf())
        } else {
            DocmineError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let mapped = DocmineError::from_io_at(err, Path::new("/tmp/nope.txt"));
        assert!(matches!(mapped, DocmineError::FileNotFound(ref p) if p == Path::new("/tmp/nope.txt")));
    }

    #[test]
    fn test_other_io_errors_pass_through() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let mapped = DocmineError::from_io_at(err, Path::new("x"));
        assert!(matches!(mapped, DocmineError::Io(_)));
    }

    #[test]
    fn test_dictionary_error_message() {
        let err = DocmineError::Dictionary {
            line: 7,
            message: "missing lemma".to_string(),
        };
        assert_eq!(err.to_string(), "Dictionary error at line 7: missing lemma");
    }
}
