//! crates/eztechpal_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the portal's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! on-device storage medium or the password policy.

use chrono::{DateTime, Utc};

//=========================================================================================
// Store Error and Result Types
//=========================================================================================

/// Errors surfaced by the persistent store.
///
/// The store fails loudly: an unreadable medium or garbled stored data is an
/// error, never an empty result.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data under key {key:?} is corrupt: {detail}")]
    Corrupt { key: String, detail: String },
}

/// A convenience type alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// A synchronous, device-local key-value store with string keys and values.
///
/// No transactions and no concurrent-writer coordination: callers are
/// single-threaded, and read-modify-write sequences are atomic only because
/// nothing else runs in between. Values survive process restarts; a key is
/// cleared only by an explicit `remove`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// The time source for record timestamps and calendar-day checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The password policy seam.
///
/// The portal ships with a placeholder policy that accepts any password (the
/// behavior the UI advertises); swapping in a real credential checker is a
/// one-implementation change behind this trait.
pub trait Authenticator: Send + Sync {
    /// Records credentials for a newly registered account.
    fn enroll(&self, email: &str, password: &str);

    /// Checks a presented password for the account with this email.
    fn verify(&self, email: &str, password: &str) -> bool;
}
