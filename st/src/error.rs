//! Generation error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a create operation
///
/// A missing template file is not represented here: resolution degrades to
/// the built-in default instead of failing.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(
        "Invalid type name {name:?}: names must start with a letter or underscore, \
         contain only letters, digits, and underscores, and avoid reserved words"
    )]
    InvalidName { name: String },

    #[error("File already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
