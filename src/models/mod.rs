mod instance;
mod state;

pub use instance::{InstanceMetadata, MessageResponse, PingResponse};
pub use state::AppState;
