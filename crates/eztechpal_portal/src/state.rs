//! crates/eztechpal_portal/src/state.rs
//!
//! Defines the application state shared by all domain operations.
//!
//! There is no module-level mutable state anywhere in the portal: every
//! operation receives an explicit `AppState` from the caller.

use crate::adapters::FileStore;
use crate::auth::AcceptAnyPassword;
use crate::config::AppConfig;
use crate::error::PortalResult;
use chrono::{DateTime, Utc};
use eztechpal_core::ports::{Authenticator, Clock, KeyValueStore, SystemClock};
use std::sync::{Arc, Mutex};

//=========================================================================================
// AppState (Shared Across All Operations)
//=========================================================================================

/// The shared application state, created once at startup and passed to every
/// domain operation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub authenticator: Arc<dyn Authenticator>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<AppConfig>,
    ids: Arc<IdSequence>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
        clock: Arc<dyn Clock>,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            authenticator,
            clock,
            config: Arc::new(config),
            ids: Arc::new(IdSequence::new()),
        }
    }

    /// Builds the default wiring: environment configuration, a file-backed
    /// store under the configured data directory, the placeholder password
    /// policy, and the system clock.
    pub fn from_env() -> PortalResult<Self> {
        let config = AppConfig::from_env()?;
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self::new(
            Arc::new(store),
            Arc::new(AcceptAnyPassword),
            Arc::new(SystemClock),
            config,
        ))
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Issues the next record id.
    pub(crate) fn next_id(&self) -> String {
        self.ids.next(self.clock.now())
    }
}

//=========================================================================================
// Id Generation
//=========================================================================================

/// Issues string record ids derived from current time in milliseconds.
///
/// Human-paced invocation makes the raw timestamp unique already; the
/// sequence bumps past the last issued value so that rapid back-to-back
/// calls never collide.
pub(crate) struct IdSequence {
    last_ms: Mutex<i64>,
}

impl IdSequence {
    pub(crate) fn new() -> Self {
        Self {
            last_ms: Mutex::new(0),
        }
    }

    pub(crate) fn next(&self, now: DateTime<Utc>) -> String {
        let mut last = match self.last_ms.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let issued = now.timestamp_millis().max(*last + 1);
        *last = issued;
        issued.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_follow_the_clock() {
        let ids = IdSequence::new();
        let now = "2024-05-01T08:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(ids.next(now), now.timestamp_millis().to_string());
    }

    #[test]
    fn ids_stay_unique_under_a_frozen_clock() {
        let ids = IdSequence::new();
        let now = "2024-05-01T08:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let issued: HashSet<String> = (0..100).map(|_| ids.next(now)).collect();
        assert_eq!(issued.len(), 100);
    }
}
