//! API server lifecycle: starts and stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::router::api_router;
use crate::core_state::CoreState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read bound address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// Session metadata for a running server.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSession {
    pub session_id: String,
    pub server_addr: SocketAddr,
    pub started_at: String,
}

impl ServerSession {
    pub fn port(&self) -> u16 {
        self.server_addr.port()
    }
}

/// Handle to a running API server.
pub struct ApiServer {
    pub session: ServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ApiServer {
    /// Signal graceful shutdown. In-flight requests are allowed to finish.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Wait for the server task to exit.
    pub async fn wait(self) {
        if let Err(e) = self.task.await {
            tracing::error!("API server task failed: {e}");
        }
    }
}

/// Bind `addr` and serve the API (plus the frontend, if given) in a
/// background task.
///
/// Port 0 picks an ephemeral port; the bound address is in the session.
pub async fn start_api_server(
    core: Arc<CoreState>,
    addr: SocketAddr,
    frontend_dir: Option<PathBuf>,
) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    let app = api_router(core, frontend_dir);

    let session = ServerSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr,
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
