//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::PeriodRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Evaluation period catalog
    pub repository: Arc<dyn PeriodRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn PeriodRepository>) -> Self {
        Self { repository }
    }
}
