//! Integration tests for the file-backed store: data and the login session
//! survive a restart, and corrupt data fails loudly instead of reading as
//! an empty collection.

use eztechpal_core::domain::{Role, User};
use eztechpal_core::ports::{KeyValueStore, StoreError, SystemClock};
use eztechpal_portal::adapters::FileStore;
use eztechpal_portal::auth::AcceptAnyPassword;
use eztechpal_portal::collections::keys;
use eztechpal_portal::ops::{accounts, requests};
use eztechpal_portal::{session, AppConfig, AppState, PortalError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

fn scratch_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "eztechpal-persistence-{}-{label}-{n}",
        std::process::id()
    ))
}

fn file_state(dir: &PathBuf) -> AppState {
    AppState::new(
        Arc::new(FileStore::open(dir).unwrap()),
        Arc::new(AcceptAnyPassword),
        Arc::new(SystemClock),
        AppConfig::default(),
    )
}

#[test]
fn records_and_session_survive_a_restart() {
    let dir = scratch_dir("restart");

    let before = file_state(&dir);
    accounts::register_customer(&before, "Alice", "a@x.com", "0811", "pw").unwrap();
    requests::submit_service_request(&before, "Alice", "0811", "cracked screen").unwrap();
    drop(before);

    let after = file_state(&dir);
    let restored = session::current(&after).unwrap().expect("session survives");
    assert_eq!(restored.name, "Alice");
    assert_eq!(restored.role, Role::Customer);

    let history = requests::list_for_session(&after).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].issue, "cracked screen");
}

#[test]
fn logout_clears_the_persisted_session() {
    let dir = scratch_dir("logout");

    let state = file_state(&dir);
    accounts::register_customer(&state, "Alice", "a@x.com", "0811", "pw").unwrap();
    accounts::logout(&state).unwrap();
    drop(state);

    let after = file_state(&dir);
    assert_eq!(session::current(&after).unwrap(), None);
}

#[test]
fn garbled_collection_data_surfaces_as_corrupt() {
    let dir = scratch_dir("corrupt");
    let state = file_state(&dir);
    state.store.set(keys::SERVICES, "{ definitely not json").unwrap();

    let alice = User {
        id: "1".to_string(),
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        role: Role::Customer,
        phone: Some("0811".to_string()),
    };
    match requests::list_for_customer(&state, &alice) {
        Err(PortalError::Store(StoreError::Corrupt { key, .. })) => {
            assert_eq!(key, keys::SERVICES);
        }
        other => panic!("expected corrupt store error, got {other:?}"),
    }
}

#[test]
fn garbled_session_data_surfaces_as_corrupt() {
    let dir = scratch_dir("corrupt-session");
    let state = file_state(&dir);
    state.store.set(keys::CURRENT_USER, "not a record").unwrap();

    assert!(matches!(
        session::current(&state),
        Err(PortalError::Store(StoreError::Corrupt { .. }))
    ));
}
