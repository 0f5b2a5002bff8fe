//! Scannable-code payload.
//!
//! The printed tag carries a code image encoding the URL of a record's
//! public profile view. Image rendering is the caller's concern; this
//! module only builds the payload string.

/// Build the profile URL embedded in a record's scannable code.
pub fn profile_url(base: &str, id: &str) -> String {
    format!("{}/view/{id}", base.trim_end_matches('/'))
}
