//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `DdError` where they
//! need to surface a core failure (see `dd_sim::SimError::Config`).

use thiserror::Error;

/// The top-level error type for `dd-core`.
#[derive(Debug, Error)]
pub enum DdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `dd-*` crates.
pub type DdResult<T> = Result<T, DdError>;
