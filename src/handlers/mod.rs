//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Ping** (`ping`) - Health check reporting instance metadata, plus a POST input check
//! - **Fallback** (`fallback`) - JSON 404 for unmatched routes

mod fallback;
mod ping;

pub use fallback::*;
pub use ping::*;
