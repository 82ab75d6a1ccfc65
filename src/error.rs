use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("Failed to read ledger {}: {reason}", path.display())]
    StorageRead { path: PathBuf, reason: String },

    #[error("Failed to write ledger {}: {reason}", path.display())]
    StorageWrite { path: PathBuf, reason: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
