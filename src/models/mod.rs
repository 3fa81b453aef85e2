//! Record types persisted by the record store.
//!
//! All three kinds are append-only and independent of each other.

pub mod chat;
pub mod reminder;
pub mod vitals;

pub use chat::*;
pub use reminder::*;
pub use vitals::*;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};

/// Current UTC time as an ISO-8601 string, e.g. `2025-03-01T08:15:30.123456Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Deserialize a free-form text field that clients may also send as a JSON
/// number or boolean. `null` and a missing field both give `None`.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}
