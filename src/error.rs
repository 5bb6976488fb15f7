//! Error types for merkle_levels

use thiserror::Error;

/// Result type alias for merkle_levels operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in merkle_levels operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("A valid MerkleTree must have at least one data block.")]
    EmptyInput,

    #[error("MerkleTree Level #{0} does not exist")]
    LevelNotFound(i64),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidDigest(err.to_string())
    }
}
