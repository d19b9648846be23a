//! crates/eztechpal_portal/src/ops/mod.rs
//!
//! The domain operations a presentation layer calls. Every operation takes
//! an explicit `AppState`, reads whole collections from the store, mutates
//! an in-memory copy, and writes the whole collection back.

pub mod accounts;
pub mod attendance;
pub mod requests;

use crate::error::{PortalError, PortalResult};

/// Required-field check shared by the operations. Preventing empty fields is
/// the presentation layer's job; this keeps the contract total.
pub(crate) fn require_field(field: &str, value: &str) -> PortalResult<()> {
    if value.trim().is_empty() {
        return Err(PortalError::Validation(format!("{field} is required")));
    }
    Ok(())
}
