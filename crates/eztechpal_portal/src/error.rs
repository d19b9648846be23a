//! crates/eztechpal_portal/src/error.rs
//!
//! Defines the primary error type for the portal crate.

use crate::config::ConfigError;
use eztechpal_core::ports::StoreError;

/// The primary error type for portal operations.
///
/// Every variant is recoverable and user-facing; the presentation layer maps
/// each one to a message and never tears down the session.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// A required field was empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials did not match any account.
    #[error("Authentication failed: {0}")]
    AuthFailure(String),

    /// An attendance entry already exists for this employee today.
    #[error("Already clocked in today")]
    AlreadyClockedIn,

    /// No open attendance entry exists for this employee today.
    #[error("Not clocked in today")]
    NotClockedIn,

    /// Represents an error that propagated up from the persistent store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A convenience type alias for `Result<T, PortalError>`.
pub type PortalResult<T> = Result<T, PortalError>;
