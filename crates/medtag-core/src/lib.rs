//! MedTag Core Library
//!
//! Persistence and identity core for the MedTag emergency-profile
//! registry: a person records a short profile (name, contact, medical
//! notes) and receives a scannable code linking to its public view.
//!
//! # Architecture
//!
//! ```text
//!   Presentation layer (out of scope)
//!            │
//!            ▼
//!      RecordStore ──────────► RemoteStore (PostgREST table)
//!            │   remote-first        │
//!            │                 per-call failure
//!            ▼                       │
//!       LocalStore ◄─────────────────┘
//!     (whole-blob JSON fallback)
//! ```
//!
//! # Core behavior
//!
//! The gateway decides once, at construction, whether a remote store is
//! configured. Without one, every operation is local. With one, every
//! operation attempts the remote path and degrades to the local blob for
//! that single call on failure; the next call tries the remote again.
//!
//! # Modules
//!
//! - [`models`]: the [`Record`] domain type
//! - [`codes`]: record id and personal-code generation
//! - [`store`]: the persistence gateway, remote client, and local blob
//! - [`link`]: scannable-code payload URL
//! - [`config`]: figment-based configuration

pub mod codes;
pub mod config;
pub mod error;
pub mod link;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use config::{Config, RemoteConfig};
pub use error::{StoreError, StoreResult};
pub use link::profile_url;
pub use models::Record;
pub use store::{LocalStore, PostgrestRemote, RecordRow, RecordStore, RemoteError, RemoteStore};
