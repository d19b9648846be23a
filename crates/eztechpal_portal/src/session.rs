//! crates/eztechpal_portal/src/session.rs
//!
//! The persisted login session: at most one current user, stored under its
//! own key so that a restart restores the login.

use crate::collections::{keys, UserRecord};
use crate::error::PortalResult;
use crate::state::AppState;
use eztechpal_core::domain::User;
use eztechpal_core::ports::{KeyValueStore, StoreError};

/// Returns the persisted current user, if anyone is logged in.
pub fn current(state: &AppState) -> PortalResult<Option<User>> {
    let Some(raw) = state.store.get(keys::CURRENT_USER)? else {
        return Ok(None);
    };
    let record: UserRecord = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
        key: keys::CURRENT_USER.to_string(),
        detail: e.to_string(),
    })?;
    let user = record.to_domain().map_err(|detail| StoreError::Corrupt {
        key: keys::CURRENT_USER.to_string(),
        detail,
    })?;
    Ok(Some(user))
}

/// Persists `user` as the current session.
pub fn remember(state: &AppState, user: &User) -> PortalResult<()> {
    let record = UserRecord::from_domain(user);
    let raw = serde_json::to_string(&record).map_err(|e| {
        StoreError::Unavailable(format!("cannot encode {}: {e}", keys::CURRENT_USER))
    })?;
    state.store.set(keys::CURRENT_USER, &raw)?;
    Ok(())
}

/// Removes the persisted session, if any.
pub fn clear(state: &AppState) -> PortalResult<()> {
    state.store.remove(keys::CURRENT_USER)?;
    Ok(())
}
