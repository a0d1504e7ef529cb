//! Core error types for resource-routes.
//!
//! This module provides [`RoutesError`], the single error enum shared by the
//! registry, the path helpers, the settings loader and the CLI.

use thiserror::Error;

/// The primary error type for resource-routes.
///
/// Routing failures are immediate and deterministic: every operation either
/// returns its value or fails with one of these variants without mutating
/// any state.
#[derive(Error, Debug)]
pub enum RoutesError {
    // ── Routing ──────────────────────────────────────────────────────

    /// A serialized method tag is not one of the known HTTP verbs.
    #[error("ActionMethod for name - {0} not found")]
    InvalidMethod(String),

    /// The resource name is absent from the registry.
    #[error("Resource - {0} not found.")]
    ResourceNotFound(String),

    /// The resource exists but the action is not registered for it.
    #[error("Action {action} not found in resource - {resource}")]
    ActionNotFound {
        /// The resource that was looked up.
        resource: String,
        /// The missing action name.
        action: String,
    },

    /// An absolute URL was requested but no URL root is configured.
    #[error("Url root not specified. Unable to form URL")]
    UrlRootMissing,

    /// A resource matcher could not be compiled.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RoutesError {
    /// Returns a stable, snake-case tag naming the error kind.
    ///
    /// The tag is suitable for structured log fields and CLI output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidMethod(_) => "invalid_method",
            Self::ResourceNotFound(_) => "resource_not_found",
            Self::ActionNotFound { .. } => "action_not_found",
            Self::UrlRootMissing => "url_root_missing",
            Self::InvalidPattern(_) => "invalid_pattern",
            Self::SerializationError(_) => "serialization_error",
            Self::ConfigurationError(_) => "configuration_error",
            Self::IoError(_) => "io_error",
        }
    }
}

impl From<serde_json::Error> for RoutesError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, RoutesError>`.
pub type RoutesResult<T> = Result<T, RoutesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(RoutesError::InvalidMethod("GOT".into()).kind(), "invalid_method");
        assert_eq!(RoutesError::ResourceNotFound("x".into()).kind(), "resource_not_found");
        assert_eq!(
            RoutesError::ActionNotFound {
                resource: "users".into(),
                action: "edit".into(),
            }
            .kind(),
            "action_not_found"
        );
        assert_eq!(RoutesError::UrlRootMissing.kind(), "url_root_missing");
        assert_eq!(RoutesError::InvalidPattern("(".into()).kind(), "invalid_pattern");
    }

    #[test]
    fn test_error_display() {
        let err = RoutesError::ActionNotFound {
            resource: "test".into(),
            action: "edit".into(),
        };
        assert_eq!(err.to_string(), "Action edit not found in resource - test");
        assert_eq!(
            RoutesError::InvalidMethod("FETCH".into()).to_string(),
            "ActionMethod for name - FETCH not found"
        );
        assert_eq!(
            RoutesError::UrlRootMissing.to_string(),
            "Url root not specified. Unable to form URL"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RoutesError = io_err.into();
        assert_eq!(err.kind(), "io_error");
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RoutesError = json_err.into();
        assert_eq!(err.kind(), "serialization_error");
    }
}
