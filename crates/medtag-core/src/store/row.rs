//! Row codec for the remote `persons` table.
//!
//! The remote store names its columns in snake_case while the public
//! record shape is camelCase. The mapping is purely structural: field
//! renames only, no value transformation, no defaulting.

use serde::{Deserialize, Serialize};

use crate::models::Record;

/// The `persons` table row shape.
///
/// `created_at` is absent on the write path: the remote store stamps it
/// with its own clock at insert time. Reads always carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordRow {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub address: String,
    pub personal_code: String,
    pub phone_number: String,
    pub additional_info: String,
    pub disease_or_problem: String,
    pub status: String,
    pub emergency_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl RecordRow {
    /// Build the insert row for a record, omitting the creation timestamp.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            last_name: record.last_name.clone(),
            address: record.address.clone(),
            personal_code: record.personal_code.clone(),
            phone_number: record.phone_number.clone(),
            additional_info: record.additional_info.clone(),
            disease_or_problem: record.disease_or_problem.clone(),
            status: record.status.clone(),
            emergency_note: record.emergency_note.clone(),
            created_at: None,
        }
    }
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: row.id,
            name: row.name,
            last_name: row.last_name,
            address: row.address,
            personal_code: row.personal_code,
            phone_number: row.phone_number,
            additional_info: row.additional_info,
            disease_or_problem: row.disease_or_problem,
            status: row.status,
            emergency_note: row.emergency_note,
            created_at: row.created_at.unwrap_or_default(),
        }
    }
}
