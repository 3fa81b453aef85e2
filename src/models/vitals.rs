use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::text_or_number;

/// A stored vital-sign reading. Values are kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalsRecord {
    pub id: Uuid,
    pub blood_pressure: Option<String>,
    pub blood_sugar: Option<String>,
    pub pulse: Option<String>,
    pub timestamp: Option<String>,
    pub notes: Option<String>,
}

/// A vitals submission as received from a client.
///
/// Every field is optional and free-form. Numbers are accepted alongside
/// strings (`"pulse": 72` and `"pulse": "72"` store the same text).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVitals {
    #[serde(default, deserialize_with = "text_or_number")]
    pub blood_pressure: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub blood_sugar: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub pulse: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub notes: Option<String>,
}
