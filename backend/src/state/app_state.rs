//! Application state shared across handlers

use crate::endpoints::Endpoints;
use crate::services::{BasicStringService, StringService};
use std::sync::Arc;

/// Shared application state
///
/// Read-only after construction, so handlers share it through an `Arc`
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Endpoints bound to the HTTP routes
    pub endpoints: Endpoints,
}

impl AppState {
    /// Create state backed by the default [`BasicStringService`]
    pub fn new() -> Self {
        Self::with_service(Arc::new(BasicStringService))
    }

    /// Create state backed by a custom service implementation
    pub fn with_service(svc: Arc<dyn StringService>) -> Self {
        Self {
            endpoints: Endpoints::new(svc),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
