//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai_configured: bool,
    pub version: &'static str,
}

/// `GET /health`: liveness probe; reports whether replies can use the AI path.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        ai_configured: ctx.core.ai_configured(),
        version: crate::config::APP_VERSION,
    })
}
