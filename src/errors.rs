use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced while reading one of the dictionary's binary or JSON tables.
///
/// Query-time operations (`word_forms`, `tag`, `inflect`, phrase concordance)
/// never return this: a malformed dictionary is caught once, at load time,
/// and an absent match is simply an empty result, not an error.
///
/// Stores messages rather than the underlying `std::io::Error`/`serde_json::Error`
/// so the whole enum stays `Clone` — [`crate::analyzer::shared`] caches one of
/// these for every later caller to observe.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("couldn't read {file}: {message}")]
    File { file: PathBuf, message: String },

    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("truncated {what}")]
    Truncated { what: &'static str },

    #[error("malformed {what}")]
    Malformed { what: &'static str },
}

impl LoadError {
    pub(crate) fn file(file: PathBuf, error: std::io::Error) -> Self {
        Self::File {
            file,
            message: error.to_string(),
        }
    }

    pub(crate) fn json(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

/// Top-level crate error.
///
/// The only way a caller can see this outside of explicit dictionary loading
/// is through [`crate::analyzer`]'s lazily-initialized singleton, which
/// propagates the first load failure to every subsequent caller.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("failed to load dictionary -> {0}")]
    Load(#[from] LoadError),
}
