use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored reminder. Nothing schedules or fires it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRecord {
    pub id: Uuid,
    pub title: String,
    pub time: String,
    pub notes: Option<String>,
}

/// Validated input for a new reminder.
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub title: String,
    pub time: String,
    pub notes: Option<String>,
}
