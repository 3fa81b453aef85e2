//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! JSON routes sit at the root; anything unmatched falls through to the
//! static frontend when a directory is given.
//!
//! Layers (outermost → innermost):
//! 1. CORS (any origin) → 2. `Cache-Control: no-store` on JSON routes

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the application router.
///
/// `frontend_dir` is served for every path no JSON route claims; `None`
/// leaves those paths as 404.
pub fn api_router(core: Arc<CoreState>, frontend_dir: Option<PathBuf>) -> Router {
    let ctx = ApiContext::new(core);
    build_router(ctx, frontend_dir)
}

fn build_router(ctx: ApiContext, frontend_dir: Option<PathBuf>) -> Router {
    // route_layer: the header applies to matched routes only, not the static fallback
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", post(endpoints::chat::send))
        .route(
            "/vitals",
            get(endpoints::vitals::list).post(endpoints::vitals::record),
        )
        .route("/reminder", post(endpoints::reminders::create))
        .route("/reminders", get(endpoints::reminders::list))
        .with_state(ctx)
        .route_layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let app = match frontend_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(CorsLayer::permissive())
}
