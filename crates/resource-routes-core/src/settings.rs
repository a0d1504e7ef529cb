//! Settings for resource-routes.
//!
//! This module provides the [`Settings`] struct, which holds the routing
//! configuration. Settings are loaded once by the caller (see
//! [`settings_loader`](crate::settings_loader)) and passed by reference.

use serde::{Deserialize, Serialize};

/// The complete set of routing settings.
///
/// # Examples
///
/// ```
/// use resource_routes_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.global_path_prefix.is_empty());
/// assert!(settings.url_root.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    // ── Routing ──────────────────────────────────────────────────────

    /// Prefix prepended to every generated path (e.g. `/api`).
    pub global_path_prefix: String,
    /// Scheme and host prepended by `url_to` (e.g. `http://example.com`).
    pub url_root: Option<String>,

    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode is enabled. Selects the pretty log format.
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug", "resource_routes_http=trace").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            global_path_prefix: String::new(),
            url_root: None,
            debug: true,
            log_level: "info".to_string(),
        }
    }
}
