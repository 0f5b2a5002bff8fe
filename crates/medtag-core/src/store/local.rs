//! Local fallback store.
//!
//! A single JSON blob file holding the full record list in the public
//! camelCase shape. Every mutation is a read-modify-write of the whole
//! list, matching the browser-storage blob this store descends from.
//!
//! Known hazard: the read-modify-write is not atomic. Two fallback
//! writers racing on the same file can lose one of the writes. The
//! registry runs one writer at a time in practice, so no lock is taken.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::Record;

/// Default blob file name under the data directory.
pub const RECORDS_FILE_NAME: &str = "records.json";

/// Whole-blob record store on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Create a store backed by the given blob file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record list.
    ///
    /// A missing file is the empty initial state. So is a corrupt one:
    /// malformed content is logged and discarded rather than failing the
    /// call, the next write re-initializes the blob.
    pub fn load(&self) -> StoreResult<Vec<Record>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::LocalIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "local store blob is corrupt, starting from empty state");
                Ok(Vec::new())
            }
        }
    }

    /// Rewrite the full record list.
    pub fn save(&self, records: &[Record]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::LocalIo {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let raw = serde_json::to_string(records)?;
        std::fs::write(&self.path, raw).map_err(|source| StoreError::LocalIo {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "local store blob rewritten");
        Ok(())
    }

    /// Append a record to the blob.
    ///
    /// Stamps `created_at` with the client clock if the caller left it
    /// empty; the timestamp belongs to the persistence boundary.
    pub fn insert(&self, record: &Record) -> StoreResult<()> {
        let mut records = self.load()?;
        let mut record = record.clone();
        if record.created_at.is_empty() {
            record.created_at = chrono::Utc::now().to_rfc3339();
        }
        records.push(record);
        self.save(&records)
    }

    /// All records, newest first by `created_at`.
    pub fn list_all(&self) -> StoreResult<Vec<Record>> {
        let mut records = self.load()?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Look up a record by id.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Record>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    /// Remove a record by id. Removing an absent id leaves the blob as-is.
    pub fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!(%id, "delete of absent id, local store unchanged");
            return Ok(());
        }
        self.save(&records)
    }
}
