//! Remote store seam.
//!
//! The gateway talks to the remote record store through this trait and
//! pattern-matches on the returned `Result` to decide whether to degrade
//! to the local store. The fallback decision is an explicit branch on a
//! value, never exception-style propagation.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Record;

/// Errors from a single remote store attempt.
///
/// Any variant triggers the gateway's per-call local fallback; none of
/// them are sticky.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote store returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed remote response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid remote store url: {0}")]
    InvalidUrl(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// One attempt against the remote record store.
///
/// Implementations must treat an absent id as an empty result, not an
/// error: "not found" is an expected outcome of a lookup.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Insert a record. The remote store assigns `created_at`.
    async fn insert(&self, record: &Record) -> RemoteResult<()>;

    /// Fetch every record, ordered by `created_at` descending.
    async fn list_all(&self) -> RemoteResult<Vec<Record>>;

    /// Fetch one record by id, `None` if absent.
    async fn get_by_id(&self, id: &str) -> RemoteResult<Option<Record>>;

    /// Delete a record by id. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: &str) -> RemoteResult<()>;
}
