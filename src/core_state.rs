//! Shared application state.
//!
//! `CoreState` is built once at startup and handed to the HTTP layer in an
//! `Arc`. It owns the single record-store connection and the optional
//! completion client; nothing here is global.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::completion::ChatCompletion;
use crate::db::{self, DatabaseError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("database lock poisoned")]
    LockPoisoned,
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub struct CoreState {
    /// Record store. SQLite serializes writes itself; the mutex only makes
    /// the connection shareable across request tasks.
    db: Mutex<Connection>,
    /// `None` when no API key is configured.
    completion: Option<Arc<dyn ChatCompletion>>,
}

impl CoreState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Mutex::new(conn),
            completion: None,
        }
    }

    /// In-memory store with no completion client (tests, demos).
    pub fn in_memory() -> Result<Self, CoreError> {
        Ok(Self::new(db::open_memory_database()?))
    }

    pub fn with_completion(mut self, client: Arc<dyn ChatCompletion>) -> Self {
        self.completion = Some(client);
        self
    }

    /// Lock the record store for a short synchronous operation.
    ///
    /// Never hold the guard across an `.await`.
    pub fn db(&self) -> Result<MutexGuard<'_, Connection>, CoreError> {
        self.db.lock().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn completion(&self) -> Option<&dyn ChatCompletion> {
        self.completion.as_deref()
    }

    pub fn ai_configured(&self) -> bool {
        self.completion.is_some()
    }
}
