use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while building a `PhraseIndex`.
///
/// All of them are fatal at startup. Query-time misses are not errors and
/// never show up here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("phrases file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read phrases file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed phrase dataset: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}
