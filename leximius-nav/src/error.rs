//! Error types for navigation configuration
//!
//! Errors here only ever come from building or loading configuration: route
//! tables with duplicate paths, breadcrumb maps with parent cycles, files
//! that fail to read or parse. Lookups over a built configuration never
//! fail - an unknown path is a soft miss answered with `None` or an empty
//! sequence, so a navigation link can never crash the page.
//!
//! Each variant has a stable, uppercase error code from [`NavError::error_code`]
//! suitable for logging and client-side handling.

use thiserror::Error;

/// Result type alias for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors that can occur while building navigation configuration
#[derive(Error, Debug)]
pub enum NavError {
    /// Two route descriptors share the same path
    #[error("Duplicate route path: '{path}'. Each path must appear at most once in the route table.")]
    DuplicateRoute { path: String },

    /// Route table is malformed or missing required fields
    #[error("Invalid route table: {reason}")]
    InvalidRouteTable { reason: String },

    /// A breadcrumb entry's parent chain loops back on itself
    #[error("Breadcrumb parent cycle at '{path}'. Parent chains must terminate at an entry with no parent.")]
    BreadcrumbCycle { path: String },

    /// Breadcrumb map is malformed or missing required fields
    #[error("Invalid breadcrumb map: {reason}")]
    InvalidBreadcrumbMap { reason: String },

    /// Failed to load configuration from a file
    #[error("Failed to load navigation config from '{path}': {reason}")]
    ConfigLoadError { path: String, reason: String },

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl NavError {
    /// Returns the stable error code for this error
    ///
    /// Codes are uppercase, underscore-separated identifiers that remain
    /// stable across versions.
    pub fn error_code(&self) -> &'static str {
        match self {
            NavError::DuplicateRoute { .. } => "DUPLICATE_ROUTE",
            NavError::InvalidRouteTable { .. } => "INVALID_ROUTE_TABLE",
            NavError::BreadcrumbCycle { .. } => "BREADCRUMB_CYCLE",
            NavError::InvalidBreadcrumbMap { .. } => "INVALID_BREADCRUMB_MAP",
            NavError::ConfigLoadError { .. } => "CONFIG_LOAD_ERROR",
            NavError::JsonError(_) => "JSON_ERROR",
        }
    }

    /// Returns true if this error came from reading or parsing an external
    /// source rather than from the configuration's own structure
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            NavError::ConfigLoadError { .. } | NavError::JsonError(_)
        )
    }
}
