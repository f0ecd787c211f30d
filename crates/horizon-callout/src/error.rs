//! Error types for the callout crate.

use thiserror::Error;

/// Errors that can occur while building or querying a callout.
///
/// Positioning itself is a total computation and never fails; errors are
/// reserved for construction-time problems and explicit queries. Missing
/// runtime context (no screen under the window, no remembered anchor) is
/// handled as a silent no-op in the lifecycle paths instead of an error.
#[derive(Error, Debug)]
pub enum CalloutError {
    /// The platform refused to create the callout window.
    #[error("failed to create callout window: {0}")]
    WindowCreation(String),

    /// No screen could be resolved for the window.
    #[error("no screen available")]
    NoScreen,
}

/// Result type for callout operations.
pub type CalloutResult<T> = Result<T, CalloutError>;
