//! crates/eztechpal_portal/src/ops/accounts.rs
//!
//! Registration, login, and logout.
//!
//! Passwords go through the `Authenticator` port; under the default policy
//! any password is accepted once the email matches. The employee and
//! customer paths are deliberately asymmetric: an unknown employee email
//! can still log in as the admin placeholder, while customers must register
//! first.

use super::require_field;
use crate::collections::{self, keys};
use crate::error::{PortalError, PortalResult};
use crate::session;
use crate::state::AppState;
use eztechpal_core::domain::{Role, User};
use tracing::{info, warn};

/// Identity synthesized for the admin placeholder when the employee
/// directory has no record for the configured admin email.
const ADMIN_USER_ID: &str = "1";
const ADMIN_USER_NAME: &str = "Admin User";

/// Logs an employee in by directory lookup.
///
/// The synthesized admin is persisted to the session only, never to the
/// employee directory.
pub fn login_employee(state: &AppState, email: &str, password: &str) -> PortalResult<User> {
    require_field("email", email)?;
    require_field("password", password)?;

    let employees = collections::load_users(state.store.as_ref(), keys::EMPLOYEES)?;
    let known = employees.into_iter().find(|e| e.email == email);

    let user = match known {
        Some(user) => user,
        None if email == state.config.admin_email => User {
            id: ADMIN_USER_ID.to_string(),
            name: ADMIN_USER_NAME.to_string(),
            email: state.config.admin_email.clone(),
            role: Role::Employee,
            phone: None,
        },
        None => {
            warn!(email, "employee login rejected: unknown email");
            return Err(PortalError::AuthFailure("unknown employee email".to_string()));
        }
    };

    if !state.authenticator.verify(email, password) {
        warn!(email, "employee login rejected: invalid credentials");
        return Err(PortalError::AuthFailure("invalid credentials".to_string()));
    }

    session::remember(state, &user)?;
    info!(user = %user.name, "employee logged in");
    Ok(user)
}

/// Creates a customer account and logs it in.
///
/// There is no uniqueness check on the email: registering twice creates two
/// records.
pub fn register_customer(
    state: &AppState,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> PortalResult<User> {
    require_field("name", name)?;
    require_field("email", email)?;
    require_field("phone", phone)?;
    require_field("password", password)?;

    let mut customers = collections::load_users(state.store.as_ref(), keys::CUSTOMERS)?;
    let user = User {
        id: state.next_id(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Customer,
        phone: Some(phone.to_string()),
    };
    customers.push(user.clone());
    collections::save_users(state.store.as_ref(), keys::CUSTOMERS, &customers)?;

    state.authenticator.enroll(email, password);
    session::remember(state, &user)?;
    info!(user = %user.name, "customer account created");
    Ok(user)
}

/// Logs a customer in by email lookup. Unknown emails fail: customers must
/// register first, there is no auto-create fallback.
pub fn login_customer(state: &AppState, email: &str, password: &str) -> PortalResult<User> {
    require_field("email", email)?;
    require_field("password", password)?;

    let customers = collections::load_users(state.store.as_ref(), keys::CUSTOMERS)?;
    let Some(user) = customers.into_iter().find(|c| c.email == email) else {
        warn!(email, "customer login rejected: account not found");
        return Err(PortalError::AuthFailure(
            "account not found, register first".to_string(),
        ));
    };

    if !state.authenticator.verify(email, password) {
        warn!(email, "customer login rejected: invalid credentials");
        return Err(PortalError::AuthFailure("invalid credentials".to_string()));
    }

    session::remember(state, &user)?;
    info!(user = %user.name, "customer logged in");
    Ok(user)
}

/// Clears the persisted session.
pub fn logout(state: &AppState) -> PortalResult<()> {
    session::clear(state)?;
    info!("logged out");
    Ok(())
}
