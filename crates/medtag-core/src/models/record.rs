//! Record model.

use serde::{Deserialize, Serialize};

use crate::codes;

/// A person's emergency profile.
///
/// This is the public shape of a record as the presentation layer and the
/// local fallback store see it. Serialized field names are camelCase, the
/// app format the registry has always used for its local blob.
///
/// Optional free-text fields use the empty string as the "absent" value,
/// never `None` — the forms that produce records submit every field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Primary key, assigned at creation, immutable.
    pub id: String,
    /// First name, required non-empty.
    pub name: String,
    /// Last name, required non-empty.
    pub last_name: String,
    /// Home address.
    pub address: String,
    /// Human-facing case number, generated once at creation.
    pub personal_code: String,
    /// Contact number, required non-empty. No format validation.
    pub phone_number: String,
    /// Free-text notes.
    pub additional_info: String,
    /// Known condition or complaint.
    pub disease_or_problem: String,
    /// Current status.
    pub status: String,
    /// Note shown to emergency responders.
    pub emergency_note: String,
    /// RFC 3339 timestamp assigned at the persistence boundary.
    pub created_at: String,
}

impl Record {
    /// Create a new record with the required fields.
    ///
    /// Assigns a fresh `id` and `personal_code` and stamps `created_at`
    /// with the client clock. The remote store overrides the timestamp
    /// with its own clock at insert time.
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: codes::record_id(),
            name: name.into(),
            last_name: last_name.into(),
            address: String::new(),
            personal_code: codes::personal_code(),
            phone_number: phone_number.into(),
            additional_info: String::new(),
            disease_or_problem: String::new(),
            status: String::new(),
            emergency_note: String::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Check the required fields the entry form validates before submit.
    ///
    /// The store itself never validates; this is a convenience for callers.
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.phone_number.trim().is_empty()
    }
}
