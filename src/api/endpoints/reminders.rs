//! Reminder endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, OkResponse};
use crate::db;
use crate::models::{text_or_number, NewReminder, ReminderRecord};

#[derive(Deserialize)]
pub struct ReminderRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct RemindersListResponse {
    pub reminders: Vec<ReminderRecord>,
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::BadRequest(format!("{field} is required"))),
    }
}

impl TryFrom<ReminderRequest> for NewReminder {
    type Error = ApiError;

    fn try_from(req: ReminderRequest) -> Result<Self, Self::Error> {
        Ok(NewReminder {
            title: required(req.title, "title")?,
            time: required(req.time, "time")?,
            notes: req.notes,
        })
    }
}

/// `POST /reminder`: `title` and `time` are required, `notes` optional.
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ReminderRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(body) = payload?;
    let reminder = NewReminder::try_from(body)?;
    let conn = ctx.core.db()?;
    let saved = db::append_reminder(&conn, &reminder)?;
    tracing::debug!(reminder_id = %saved.id, "Reminder saved");
    Ok(Json(OkResponse::ok()))
}

/// `GET /reminders`: all reminders in insertion order.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<RemindersListResponse>, ApiError> {
    let conn = ctx.core.db()?;
    let reminders = db::list_reminders(&conn)?;
    Ok(Json(RemindersListResponse { reminders }))
}
