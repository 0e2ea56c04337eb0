//! # Video Core Error Types
//!
//! The error surface of this crate is deliberately tiny. A malformed
//! `source` value is the one anomaly treated as a caller programming error
//! and surfaced synchronously; everything else (unresolved asset, empty
//! URI, missing event handler, unmounted binding) degrades silently with a
//! log line, favoring graceful degradation of the UI over raising.

use thiserror::Error;

/// Errors surfaced to the embedding application.
#[derive(Error, Debug)]
pub enum VideoError {
    /// `source` was neither a single descriptor nor a list of descriptors.
    ///
    /// Raised from [`SourceInput::from_value`](crate::source::SourceInput::from_value)
    /// before any resolution happens. Fatal to rendering; never swallowed.
    #[error("invalid type for source: expected an object, string, or array of those, got {found}")]
    InvalidSourceType {
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

/// Result type for video core operations.
pub type Result<T> = std::result::Result<T, VideoError>;
