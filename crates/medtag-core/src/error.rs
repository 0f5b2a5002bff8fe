//! Error types for medtag-core.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::store::remote::RemoteError;

/// Store-level errors surfaced to callers.
///
/// Remote failures are normally absorbed by the local fallback; a
/// `Remote` variant reaches the caller only when no fallback path exists
/// for the operation, and the local variants only when the fallback
/// itself failed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("remote store error: {0}")]
    Remote(#[from] RemoteError),

    #[error("local store I/O error at {path}: {source}")]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("local store serialization error: {0}")]
    LocalSerialize(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
