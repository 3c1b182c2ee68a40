//! Error type for suffix dispatch and snapshot loading.
//!
//! Aggregation itself cannot fail; only name-based suffix access and reading
//! a vessel snapshot from disk produce errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShipResError {
    #[error("suffix '{suffix}' not found on {structure}")]
    UnknownSuffix {
        structure: &'static str,
        suffix: String,
    },

    #[error("suffix '{suffix}' on {structure} is read only")]
    ReadOnlySuffix {
        structure: &'static str,
        suffix: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for the crate.
pub type ShipResResult<T> = Result<T, ShipResError>;
