use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User name recorded when a chat request does not carry one.
pub const DEFAULT_CHAT_USER: &str = "anonymous";

/// One chat exchange: what the user sent and what was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: Uuid,
    pub user: String,
    pub message: String,
    pub reply: String,
    pub timestamp: String,
}
