use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, installing or describing word lists.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("language '{0}' is not supported, only 'en_US' and 'en_GB' can be downloaded")]
    UnsupportedLanguage(String),

    #[error("failed to download dictionary from {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("could not determine the data directory")]
    NoDataDir,
}

pub type DictionaryResult<T> = std::result::Result<T, DictionaryError>;
