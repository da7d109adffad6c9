//! Configuration models and loading for the Mindful engine.
//!
//! This crate owns the config schema, the JSON5 file loader, and the
//! environment overlay for the completion credential.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading APIs.
pub use error::ConfigError;
/// Environment variable consulted for the completion credential.
pub use loader::API_KEY_ENV;
/// Configuration schema models.
pub use model::*;
