// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal catalog problems. None of these leave a partial catalog behind.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },
}

impl CatalogError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CatalogError::Malformed { path: path.into(), reason: reason.into() }
    }
}
