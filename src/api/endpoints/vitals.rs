//! Vitals endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, OkResponse};
use crate::db;
use crate::models::{NewVitals, VitalsRecord};

#[derive(Serialize)]
pub struct VitalsListResponse {
    pub vitals: Vec<VitalsRecord>,
}

/// `POST /vitals`: every field is optional; a missing timestamp is stamped
/// server-side.
pub async fn record(
    State(ctx): State<ApiContext>,
    payload: Result<Json<NewVitals>, JsonRejection>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(body) = payload?;
    let conn = ctx.core.db()?;
    let saved = db::append_vitals(&conn, &body)?;
    tracing::debug!(vitals_id = %saved.id, "Vitals recorded");
    Ok(Json(OkResponse::ok()))
}

/// `GET /vitals`: all readings, oldest first.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<VitalsListResponse>, ApiError> {
    let conn = ctx.core.db()?;
    let vitals = db::list_vitals(&conn)?;
    Ok(Json(VitalsListResponse { vitals }))
}
