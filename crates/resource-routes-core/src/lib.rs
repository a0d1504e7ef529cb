//! # resource-routes-core
//!
//! Core error types, settings, and logging for resource-routes. This crate has
//! no routing logic of its own and provides the foundation for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Routing settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{RoutesError, RoutesResult};
pub use settings::Settings;
