//! # Application Constants
//!
//! Fixed strings and startup defaults used throughout the service.

/// Value of the `ping` field in every health check response
pub const PING_REPLY: &str = "pong!";

/// Path served by both ping handlers
pub const PING_PATH: &str = "/api/v1/ping";

pub const SUCCESS_MESSAGE: &str = "Success";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// Instance name reported when `INSTANCE_NAME` is unset
pub const DEFAULT_INSTANCE_NAME: &str = "Instance";

/// Instance description reported when `INSTANCE_DESCRIPTION` is unset
pub const DEFAULT_INSTANCE_DESCRIPTION: &str = "This is an instance";

/// Instance id used when the host name cannot be read
pub const FALLBACK_INSTANCE_ID: &str = "localhost";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8090;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "instance_ping=debug,tower_http=debug";
