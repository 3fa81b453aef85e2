//! Chat endpoint: reply to a symptom message and record the exchange.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::chat::compose_reply;
use crate::db;
use crate::models::{text_or_number, DEFAULT_CHAT_USER};

#[derive(Deserialize)]
pub struct ChatSendRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub user: Option<String>,
}

#[derive(Serialize)]
pub struct ChatSendResponse {
    pub reply: String,
}

/// `POST /chat`: always answers 200 once the message is valid; completion
/// failures are folded into the reply text.
pub async fn send(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ChatSendRequest>, JsonRejection>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    let Json(body) = payload?;
    let message = body.message.as_deref().unwrap_or("").trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Message is required".into()));
    }
    let user = body.user.as_deref().unwrap_or(DEFAULT_CHAT_USER);

    let reply = compose_reply(ctx.core.completion(), message).await;

    let chat_id = {
        let conn = ctx.core.db()?;
        db::append_chat(&conn, user, message, &reply.text)?
    };

    tracing::info!(%chat_id, source = reply.source.as_str(), "Chat exchange recorded");

    Ok(Json(ChatSendResponse { reply: reply.text }))
}
