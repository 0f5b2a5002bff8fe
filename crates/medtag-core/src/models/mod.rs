//! Domain types for medtag-core.

mod record;

pub use record::Record;
