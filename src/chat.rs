//! Chat orchestration: completion endpoint first, local matcher as fallback.
//!
//! `compose_reply` never fails. A completion error becomes part of the reply
//! text (visible notice + local assessment) instead of a failed request.

use crate::completion::{ChatCompletion, CompletionError};
use crate::triage::local_symptom_check;

/// Where a reply came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    /// The completion endpoint answered.
    Completion,
    /// The completion endpoint failed; the local matcher answered.
    Fallback { reason: CompletionError },
    /// No completion endpoint is configured.
    Local,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Completion => "completion",
            ReplySource::Fallback { .. } => "fallback",
            ReplySource::Local => "local",
        }
    }
}

/// Reply text plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub source: ReplySource,
}

/// Text used when the completion endpoint fails.
pub fn fallback_reply(err: &CompletionError, message: &str) -> String {
    format!("(AI API failed: {err})\n\n{}", local_symptom_check(message))
}

/// Produce the reply for one chat message.
///
/// With a client, exactly one completion call is made (no retries).
pub async fn compose_reply(client: Option<&dyn ChatCompletion>, message: &str) -> ChatReply {
    let Some(client) = client else {
        return ChatReply {
            text: local_symptom_check(message),
            source: ReplySource::Local,
        };
    };

    match client.complete(message).await {
        Ok(text) => ChatReply {
            text,
            source: ReplySource::Completion,
        },
        Err(err) => {
            tracing::warn!(model = client.model(), error = %err, "Completion failed, using local matcher");
            ChatReply {
                text: fallback_reply(&err, message),
                source: ReplySource::Fallback { reason: err },
            }
        }
    }
}
