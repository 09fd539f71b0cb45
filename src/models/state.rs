use tracing::info;

use crate::models::InstanceMetadata;

/// Application state shared across requests. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Metadata reported by `GET /api/v1/ping`.
    pub instance: InstanceMetadata,
}

impl AppState {
    pub fn new(instance: InstanceMetadata) -> Self {
        info!(instance_id = %instance.id, "Initializing application state");
        Self { instance }
    }
}
