//! HTTP API.
//!
//! JSON endpoints for chat, vitals, and reminders, plus the static
//! frontend. `api_router()` returns a composable `Router`; `server`
//! owns the listener lifecycle.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
