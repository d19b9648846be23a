//! crates/eztechpal_core/src/domain.rs
//!
//! Defines the pure, core data structures for the shop portal.
//! These structs are independent of any storage or serialization format.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Which side of the portal an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,
    Customer,
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized role {0:?}")]
pub struct ParseRoleError(pub String);

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Role::Employee),
            "customer" => Ok(Role::Customer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Represents an account - an employee or a registered customer.
///
/// Identity is the `id`. The `email` is the de-facto login key but is not
/// enforced unique by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
}

/// Lifecycle of a service request. Nothing in this system moves a request
/// out of `Pending`; status changes are an administrative concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized service status {0:?}")]
pub struct ParseStatusError(pub String);

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::InProgress => "in-progress",
            ServiceStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ServiceStatus::Pending),
            "in-progress" => Ok(ServiceStatus::InProgress),
            "completed" => Ok(ServiceStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Represents a repair request submitted through the contact form.
///
/// There is no foreign key to a customer account: ownership is a soft join
/// on `phone` or `customer_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub issue: String,
    pub status: ServiceStatus,
    pub date: DateTime<Utc>,
}

/// Represents one clock-in/clock-out cycle for an employee.
///
/// `clock_out` stays unset until the matching clock-out operation finds the
/// entry again. At most one entry per employee may be open on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub date: DateTime<Utc>,
}

impl AttendanceEntry {
    /// An entry is open while no clock-out has been recorded.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Whether the entry belongs to the given calendar day.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date.date_naive() == day
    }
}
