//! Error types for the cwgen binding generator.

use std::path::PathBuf;
use thiserror::Error;

/// Schema loading and parsing errors
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema directory not found: {0:?}")]
    DirNotFound(PathBuf),

    #[error("No schema files found in {0:?}")]
    NoSchemas(PathBuf),

    #[error("Schema file has no title: {0:?}")]
    MissingTitle(PathBuf),

    #[error("Invalid schema JSON in {path:?}: {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Schema walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Schema I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generation pipeline errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Request contains no contracts")]
    EmptyContracts,

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
