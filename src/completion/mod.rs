//! External chat-completion client.
//!
//! The chat endpoint depends only on the `ChatCompletion` trait, so the
//! fallback path can be exercised without network access. `GroqClient` is
//! the production implementation (OpenAI-compatible wire format).

pub mod groq;

use std::time::Duration;

use async_trait::async_trait;

pub use groq::GroqClient;

/// Fixed instruction sent ahead of every user message.
pub const SYSTEM_PROMPT: &str = "You are a friendly medical assistant. Describe the likely \
causes of the symptoms the user mentions in plain language, point out anything that needs \
prompt medical attention, and remind the user that you do not replace a doctor.";

/// Sampling temperature for every request.
pub const TEMPERATURE: f64 = 0.6;

/// Longest slice of an error body kept in `CompletionError::Status`.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Why a completion call produced no reply text.
///
/// The `Display` form is shown to the user in the fallback notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("cannot reach completion endpoint at {0}")]
    Connection(String),

    #[error("completion endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected completion response: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl CompletionError {
    /// Build a `Status` error, keeping only the head of a long body.
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
            Some((cut, _)) => format!("{}…", &body[..cut]),
            None => body.to_string(),
        };
        CompletionError::Status { status, body }
    }
}

/// A single-shot chat completion: one user message in, reply text out.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, message: &str) -> Result<String, CompletionError>;

    /// Model identifier, for logs.
    fn model(&self) -> &str;
}
