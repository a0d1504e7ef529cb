//! Logging integration for resource-routes.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-registry spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise a structured JSON format is used.
/// Installing a second subscriber is silently ignored.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span scoping work on a single registry.
///
/// `source` names where the registry comes from (a file path, say). The
/// `prefix` field starts empty and can be recorded once the registry is known.
///
/// # Examples
///
/// ```
/// use resource_routes_core::logging::registry_span;
///
/// let span = registry_span("routes.json");
/// let _guard = span.enter();
/// span.record("prefix", "/api");
/// tracing::info!("loading resources");
/// ```
pub fn registry_span(source: &str) -> tracing::Span {
    tracing::info_span!("registry", source, prefix = tracing::field::Empty)
}
