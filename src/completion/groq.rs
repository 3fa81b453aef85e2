//! OpenAI-compatible chat-completion client (Groq by default).

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use super::{ChatCompletion, CompletionError, SYSTEM_PROMPT, TEMPERATURE};
use crate::config::CompletionConfig;

/// HTTP client for a `/chat/completions` endpoint.
pub struct GroqClient {
    endpoint: String,
    model: String,
    api_key: SecretString,
    client: reqwest::Client,
    timeout: Duration,
}

impl GroqClient {
    /// Create a client. The timeout bounds the whole request, body included.
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::HttpClient(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client,
            timeout,
        })
    }

    pub fn from_config(config: CompletionConfig) -> Result<Self, CompletionError> {
        Self::new(&config.endpoint, &config.model, config.api_key, config.timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_transport_error(&self, e: reqwest::Error) -> CompletionError {
        if e.is_timeout() {
            CompletionError::Timeout(self.timeout)
        } else if e.is_connect() {
            CompletionError::Connection(self.endpoint.clone())
        } else {
            CompletionError::HttpClient(e.to_string())
        }
    }
}

/// Request body for `/chat/completions`
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from `/chat/completions`
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

/// Pull the first choice's text out of a raw response body.
fn extract_reply(body: &str) -> Result<(String, Option<Usage>), CompletionError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::ResponseParsing(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::ResponseParsing("no choices in response".into()))?
        .message
        .content
        .ok_or_else(|| CompletionError::ResponseParsing("choice has no content".into()))?;

    Ok((content, parsed.usage))
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(&self, message: &str) -> Result<String, CompletionError> {
        let span = tracing::info_span!(
            "gen_ai.chat",
            "gen_ai.request.model" = %self.model,
            "gen_ai.usage.input_tokens" = tracing::field::Empty,
            "gen_ai.usage.output_tokens" = tracing::field::Empty,
        );

        async {
            let body = ChatCompletionRequest {
                model: &self.model,
                messages: [
                    ChatMessage {
                        role: "system",
                        content: SYSTEM_PROMPT,
                    },
                    ChatMessage {
                        role: "user",
                        content: message,
                    },
                ],
                temperature: TEMPERATURE,
            };

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(self.api_key.expose_secret())
                .json(&body)
                .send()
                .await
                .map_err(|e| self.map_transport_error(e))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| self.map_transport_error(e))?;

            if !status.is_success() {
                return Err(CompletionError::status(status.as_u16(), &text));
            }

            let (reply, usage) = extract_reply(&text)?;
            if let Some(usage) = usage {
                let span = tracing::Span::current();
                span.record("gen_ai.usage.input_tokens", usage.prompt_tokens);
                span.record("gen_ai.usage.output_tokens", usage.completion_tokens);
            }
            tracing::debug!(chars = reply.chars().count(), "Completion received");
            Ok(reply)
        }
        .instrument(span)
        .await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
