//! # Utility Modules
//!
//! Constants, environment configuration and JSON helpers used across the service.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Fixed response strings and startup defaults
//! - **Config** (`config`) - Environment-driven server settings
//! - **JSON** (`json`) - Truthiness checks for untyped request bodies

pub mod config;
pub mod constant;
pub mod json;
