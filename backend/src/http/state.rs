//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ShiftRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only shift store
    pub repository: Arc<dyn ShiftRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ShiftRepository>) -> Self {
        Self { repository }
    }
}
