//! # resource-routes-cli
//!
//! Command-line tooling for inspecting serialized resource registries.
//!
//! This crate provides:
//!
//! - **Command framework** - [`ManagementCommand`] and [`CommandRegistry`] for
//!   defining and dispatching subcommands
//! - **Built-in commands** - `routes`, `path`, `url` and `regex`, each working
//!   on a registry written by `ResourceCollection::to_json_string`
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_routes_cli::command::CommandRegistry;
//! use resource_routes_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! let names = registry.list_commands();
//! assert!(names.contains(&"routes"));
//! assert!(names.contains(&"path"));
//! ```

// These clippy lints are intentionally allowed:
// - result_large_err: RoutesError is the workspace-wide error type
// - module_name_repetitions: re-exports make module-prefixed names redundant
#![allow(clippy::result_large_err)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod commands;

pub use command::{CommandRegistry, ManagementCommand};
pub use commands::{load_registry, register_builtin_commands};
