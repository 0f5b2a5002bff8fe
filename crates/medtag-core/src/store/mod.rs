//! Record persistence gateway.
//!
//! Records live in a remote table-backed store when one is configured and
//! in a local whole-blob file otherwise. The split is decided once, at
//! construction: no remote configuration means every operation routes
//! local for the lifetime of the gateway. With a remote configured, every
//! call attempts the remote path first and degrades to the local store
//! for that single call when the attempt fails. The degrade is per-call,
//! not a circuit breaker: the next call tries the remote again.

pub mod local;
pub mod postgrest;
pub mod remote;
pub mod row;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::StoreResult;
use crate::models::Record;

pub use local::LocalStore;
pub use postgrest::PostgrestRemote;
pub use remote::{RemoteError, RemoteResult, RemoteStore};
pub use row::RecordRow;

/// Gateway over the two record stores.
///
/// The external contract is identical on both paths: create,
/// list-newest-first, get-by-id, delete-by-id. A lookup miss is `None`,
/// never an error, and deleting an absent id is a no-op.
#[derive(Debug)]
pub struct RecordStore<R = PostgrestRemote> {
    remote: Option<R>,
    local: LocalStore,
}

impl RecordStore<PostgrestRemote> {
    /// Build a gateway from configuration.
    ///
    /// Remote mode is selected here, once, based on whether both remote
    /// values are present. The choice is fixed for this instance; there
    /// is no process-wide flag.
    pub fn open(config: &Config) -> StoreResult<Self> {
        let local = LocalStore::new(config.records_path());
        let remote = match config.remote() {
            Some(remote_config) => {
                info!(url = %remote_config.url, "remote record store configured");
                Some(PostgrestRemote::new(
                    &remote_config,
                    config.request_timeout(),
                )?)
            }
            None => {
                info!("remote store not configured, records stay on this device");
                None
            }
        };
        Ok(Self::with_parts(remote, local))
    }
}

impl<R: RemoteStore> RecordStore<R> {
    /// Assemble a gateway from explicit parts.
    ///
    /// `None` for the remote selects local-only mode, same as an absent
    /// configuration would.
    pub fn with_parts(remote: Option<R>, local: LocalStore) -> Self {
        Self { remote, local }
    }

    /// Whether this gateway attempts the remote store at all.
    pub fn is_remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    /// Persist a new record.
    ///
    /// On the remote path the store's clock stamps `created_at`; the
    /// local path keeps the client stamp.
    pub async fn create(&self, record: &Record) -> StoreResult<()> {
        match &self.remote {
            Some(remote) => match remote.insert(record).await {
                Ok(()) => Ok(()),
                Err(e) => {
                    warn!(id = %record.id, error = %e, "remote create failed, writing to local store");
                    self.local.insert(record)
                }
            },
            None => self.local.insert(record),
        }
    }

    /// All records, ordered by `created_at` descending.
    pub async fn list_all(&self) -> StoreResult<Vec<Record>> {
        match &self.remote {
            Some(remote) => match remote.list_all().await {
                Ok(records) => Ok(records),
                Err(e) => {
                    warn!(error = %e, "remote list failed, reading local store");
                    self.local.list_all()
                }
            },
            None => self.local.list_all(),
        }
    }

    /// One record by id, `None` if absent in the consulted store.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Record>> {
        match &self.remote {
            Some(remote) => match remote.get_by_id(id).await {
                Ok(record) => Ok(record),
                Err(e) => {
                    warn!(%id, error = %e, "remote lookup failed, reading local store");
                    self.local.get_by_id(id)
                }
            },
            None => self.local.get_by_id(id),
        }
    }

    /// Delete a record by id. A no-op when the id is absent.
    pub async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        match &self.remote {
            Some(remote) => match remote.delete_by_id(id).await {
                Ok(()) => Ok(()),
                Err(e) => {
                    warn!(%id, error = %e, "remote delete failed, deleting from local store");
                    self.local.delete_by_id(id)
                }
            },
            None => self.local.delete_by_id(id),
        }
    }
}
