//! Identifier generation for records.
//!
//! Two independent schemes, both assigned once at record creation:
//!
//! - [`record_id`]: the primary key, embedded in the profile URL behind the
//!   scannable code.
//! - [`personal_code`]: a short human-facing case number shown on the
//!   printed profile.
//!
//! Neither is cryptographically unique. Collisions are possible in
//! principle; the registry accepts that for human record-keeping scale.

use rand::Rng;

const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE36_LOWER: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix in a personal code.
const PERSONAL_CODE_RANDOM_LEN: usize = 6;

/// Length of the random suffix in a record id.
const RECORD_ID_RANDOM_LEN: usize = 7;

fn random_base36(alphabet: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

/// Generate a human-facing personal code: the last six digits of the
/// current millisecond timestamp followed by six uppercase base-36
/// characters. Always twelve characters.
pub fn personal_code() -> String {
    let millis = now_millis().to_string();
    let tail = &millis[millis.len() - 6..];
    format!(
        "{tail}{}",
        random_base36(BASE36_UPPER, PERSONAL_CODE_RANDOM_LEN)
    )
}

/// Generate a primary record id: a constant prefix, the millisecond
/// timestamp, and a short random alphanumeric suffix.
pub fn record_id() -> String {
    format!(
        "person_{}_{}",
        now_millis(),
        random_base36(BASE36_LOWER, RECORD_ID_RANDOM_LEN)
    )
}
