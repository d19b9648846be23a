//! crates/eztechpal_portal/src/ops/requests.rs
//!
//! Service request intake and the customer-facing service history.

use super::require_field;
use crate::collections;
use crate::error::PortalResult;
use crate::session;
use crate::state::AppState;
use eztechpal_core::domain::{ServiceRequest, ServiceStatus, User};
use tracing::info;

/// Counters for the customer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Records a contact-form submission as a new pending request and returns
/// the created record (its id doubles as the customer-visible reference
/// number).
pub fn submit_service_request(
    state: &AppState,
    name: &str,
    phone: &str,
    issue: &str,
) -> PortalResult<ServiceRequest> {
    require_field("name", name)?;
    require_field("phone", phone)?;
    require_field("issue", issue)?;

    let mut services = collections::load_services(state.store.as_ref())?;
    let request = ServiceRequest {
        id: state.next_id(),
        customer_name: name.to_string(),
        phone: phone.to_string(),
        issue: issue.to_string(),
        status: ServiceStatus::Pending,
        date: state.now(),
    };
    services.push(request.clone());
    collections::save_services(state.store.as_ref(), &services)?;

    info!(id = %request.id, "service request received");
    Ok(request)
}

/// Requests visible to a customer.
///
/// Ownership is a soft join: a request matches when its phone or its
/// customer name equals the user's. Two customers sharing either field see
/// each other's requests.
pub fn list_for_customer(state: &AppState, user: &User) -> PortalResult<Vec<ServiceRequest>> {
    let services = collections::load_services(state.store.as_ref())?;
    Ok(services
        .into_iter()
        .filter(|s| {
            user.phone.as_deref() == Some(s.phone.as_str()) || s.customer_name == user.name
        })
        .collect())
}

/// Requests visible to the persisted session user; empty when nobody is
/// logged in.
pub fn list_for_session(state: &AppState) -> PortalResult<Vec<ServiceRequest>> {
    match session::current(state)? {
        Some(user) => list_for_customer(state, &user),
        None => Ok(Vec::new()),
    }
}

/// Status counters over the requests visible to `user`.
pub fn service_summary(state: &AppState, user: &User) -> PortalResult<ServiceSummary> {
    let services = list_for_customer(state, user)?;
    let mut summary = ServiceSummary {
        total: services.len(),
        pending: 0,
        in_progress: 0,
        completed: 0,
    };
    for request in &services {
        match request.status {
            ServiceStatus::Pending => summary.pending += 1,
            ServiceStatus::InProgress => summary.in_progress += 1,
            ServiceStatus::Completed => summary.completed += 1,
        }
    }
    Ok(summary)
}
