//! crates/eztechpal_portal/src/ops/attendance.rs
//!
//! The attendance clock and its history.
//!
//! Per employee per calendar day the entries move
//! `NoEntry -> Open (clock_in) -> Closed (clock_out)`. A second clock-in on
//! the same day is rejected whether the first cycle is still open or already
//! closed; clocking out without an open entry is rejected.

use super::require_field;
use crate::collections;
use crate::error::{PortalError, PortalResult};
use crate::state::AppState;
use chrono::Datelike;
use eztechpal_core::domain::AttendanceEntry;
use tracing::{info, warn};

/// Aggregates for the employee dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total_days: usize,
    pub days_this_month: usize,
    pub present_today: bool,
}

/// Opens a new attendance entry for today.
pub fn clock_in(
    state: &AppState,
    employee_id: &str,
    employee_name: &str,
) -> PortalResult<AttendanceEntry> {
    require_field("employee id", employee_id)?;
    require_field("employee name", employee_name)?;

    let mut entries = collections::load_attendance(state.store.as_ref())?;
    let now = state.now();
    let today = now.date_naive();

    if entries
        .iter()
        .any(|e| e.employee_id == employee_id && e.is_on(today))
    {
        warn!(employee_id, "clock-in rejected: entry already exists today");
        return Err(PortalError::AlreadyClockedIn);
    }

    let entry = AttendanceEntry {
        id: state.next_id(),
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
        clock_in: now,
        clock_out: None,
        date: now,
    };
    entries.push(entry.clone());
    collections::save_attendance(state.store.as_ref(), &entries)?;

    info!(employee_id, "clocked in");
    Ok(entry)
}

/// Closes today's open entry.
pub fn clock_out(state: &AppState, employee_id: &str) -> PortalResult<AttendanceEntry> {
    require_field("employee id", employee_id)?;

    let mut entries = collections::load_attendance(state.store.as_ref())?;
    let now = state.now();
    let today = now.date_naive();

    let Some(entry) = entries
        .iter_mut()
        .find(|e| e.employee_id == employee_id && e.is_on(today) && e.is_open())
    else {
        warn!(employee_id, "clock-out rejected: no open entry today");
        return Err(PortalError::NotClockedIn);
    };

    entry.clock_out = Some(now);
    let updated = entry.clone();
    collections::save_attendance(state.store.as_ref(), &entries)?;

    info!(employee_id, "clocked out");
    Ok(updated)
}

/// All attendance entries for one employee, in stored order.
pub fn list_for_employee(
    state: &AppState,
    employee_id: &str,
) -> PortalResult<Vec<AttendanceEntry>> {
    let entries = collections::load_attendance(state.store.as_ref())?;
    Ok(entries
        .into_iter()
        .filter(|e| e.employee_id == employee_id)
        .collect())
}

/// The most recent entries first, truncated for history display.
pub fn recent_history(
    state: &AppState,
    employee_id: &str,
    limit: usize,
) -> PortalResult<Vec<AttendanceEntry>> {
    let mut entries = list_for_employee(state, employee_id)?;
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    Ok(entries)
}

/// Dashboard aggregates: total days worked, days this calendar month, and
/// whether any entry exists for today.
pub fn summary(state: &AppState, employee_id: &str) -> PortalResult<AttendanceSummary> {
    let entries = list_for_employee(state, employee_id)?;
    let now = state.now();
    let today = now.date_naive();

    let days_this_month = entries
        .iter()
        .filter(|e| e.date.year() == now.year() && e.date.month() == now.month())
        .count();
    let present_today = entries.iter().any(|e| e.is_on(today));

    Ok(AttendanceSummary {
        total_days: entries.len(),
        days_this_month,
        present_today,
    })
}
