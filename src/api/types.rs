//! Shared types for the API layer.

use std::sync::Arc;

use serde::Serialize;

use crate::core_state::CoreState;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// `{"ok": true}` acknowledgement for create endpoints.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
