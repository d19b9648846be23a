//! crates/eztechpal_portal/src/collections.rs
//!
//! Typed record collections layered over the key-value store. Each
//! collection is one key holding a serialized ordered list of records.
//! Loading a key that has never been written yields an empty list; a key
//! that is present but garbled is rejected as corrupt.

use chrono::{DateTime, Utc};
use eztechpal_core::domain::{AttendanceEntry, ServiceRequest, User};
use eztechpal_core::ports::{KeyValueStore, StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Store key names, stable by contract: renaming any of these orphans data
/// written by earlier versions.
pub mod keys {
    pub const CURRENT_USER: &str = "eztech_current_user";
    pub const EMPLOYEES: &str = "eztech_employees";
    pub const CUSTOMERS: &str = "eztech_customers";
    pub const SERVICES: &str = "eztech_services";
    pub const ATTENDANCES: &str = "eztech_attendances";
}

//=========================================================================================
// "Impure" Storage Record Structs
//=========================================================================================

// The stored shape keeps the camelCase field names and string enums, so
// data written by earlier versions keeps loading. Conversion to the domain
// types is fallible: an unknown role or status is corrupt data.

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserRecord {
    pub(crate) fn to_domain(self) -> Result<User, String> {
        let role = self.role.parse().map_err(|e| format!("{e}"))?;
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
            phone: self.phone,
        })
    }

    pub(crate) fn from_domain(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            phone: user.phone.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServiceRequestRecord {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub issue: String,
    pub status: String,
    pub date: DateTime<Utc>,
}

impl ServiceRequestRecord {
    pub(crate) fn to_domain(self) -> Result<ServiceRequest, String> {
        let status = self.status.parse().map_err(|e| format!("{e}"))?;
        Ok(ServiceRequest {
            id: self.id,
            customer_name: self.customer_name,
            phone: self.phone,
            issue: self.issue,
            status,
            date: self.date,
        })
    }

    pub(crate) fn from_domain(request: &ServiceRequest) -> Self {
        Self {
            id: request.id.clone(),
            customer_name: request.customer_name.clone(),
            phone: request.phone.clone(),
            issue: request.issue.clone(),
            status: request.status.to_string(),
            date: request.date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub clock_in: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Utc>>,
    pub date: DateTime<Utc>,
}

impl AttendanceRecord {
    pub(crate) fn to_domain(self) -> Result<AttendanceEntry, String> {
        Ok(AttendanceEntry {
            id: self.id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            clock_in: self.clock_in,
            clock_out: self.clock_out,
            date: self.date,
        })
    }

    pub(crate) fn from_domain(entry: &AttendanceEntry) -> Self {
        Self {
            id: entry.id.clone(),
            employee_id: entry.employee_id.clone(),
            employee_name: entry.employee_name.clone(),
            clock_in: entry.clock_in,
            clock_out: entry.clock_out,
            date: entry.date,
        }
    }
}

//=========================================================================================
// Load / Save Helpers
//=========================================================================================

fn load_records<R: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StoreResult<Vec<R>> {
    match store.get(key)? {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            detail: e.to_string(),
        }),
    }
}

fn save_records<R: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    records: &[R],
) -> StoreResult<()> {
    let raw = serde_json::to_string(records)
        .map_err(|e| StoreError::Unavailable(format!("cannot encode {key}: {e}")))?;
    store.set(key, &raw)
}

fn corrupt(key: &str, detail: String) -> StoreError {
    StoreError::Corrupt {
        key: key.to_string(),
        detail,
    }
}

pub(crate) fn load_users(store: &dyn KeyValueStore, key: &str) -> StoreResult<Vec<User>> {
    let records: Vec<UserRecord> = load_records(store, key)?;
    records
        .into_iter()
        .map(|r| r.to_domain().map_err(|detail| corrupt(key, detail)))
        .collect()
}

pub(crate) fn save_users(
    store: &dyn KeyValueStore,
    key: &str,
    users: &[User],
) -> StoreResult<()> {
    let records: Vec<UserRecord> = users.iter().map(UserRecord::from_domain).collect();
    save_records(store, key, &records)
}

pub(crate) fn load_services(store: &dyn KeyValueStore) -> StoreResult<Vec<ServiceRequest>> {
    let records: Vec<ServiceRequestRecord> = load_records(store, keys::SERVICES)?;
    records
        .into_iter()
        .map(|r| r.to_domain().map_err(|detail| corrupt(keys::SERVICES, detail)))
        .collect()
}

pub(crate) fn save_services(
    store: &dyn KeyValueStore,
    requests: &[ServiceRequest],
) -> StoreResult<()> {
    let records: Vec<ServiceRequestRecord> = requests
        .iter()
        .map(ServiceRequestRecord::from_domain)
        .collect();
    save_records(store, keys::SERVICES, &records)
}

pub(crate) fn load_attendance(store: &dyn KeyValueStore) -> StoreResult<Vec<AttendanceEntry>> {
    let records: Vec<AttendanceRecord> = load_records(store, keys::ATTENDANCES)?;
    records
        .into_iter()
        .map(|r| {
            r.to_domain()
                .map_err(|detail| corrupt(keys::ATTENDANCES, detail))
        })
        .collect()
}

pub(crate) fn save_attendance(
    store: &dyn KeyValueStore,
    entries: &[AttendanceEntry],
) -> StoreResult<()> {
    let records: Vec<AttendanceRecord> =
        entries.iter().map(AttendanceRecord::from_domain).collect();
    save_records(store, keys::ATTENDANCES, &records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use eztechpal_core::domain::{Role, ServiceStatus};

    fn sample_user() -> User {
        User {
            id: "1710000000000".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Customer,
            phone: Some("0811".to_string()),
        }
    }

    #[test]
    fn never_written_collection_loads_empty() {
        let store = MemoryStore::new();
        assert!(load_users(&store, keys::CUSTOMERS).unwrap().is_empty());
        assert!(load_services(&store).unwrap().is_empty());
        assert!(load_attendance(&store).unwrap().is_empty());
    }

    #[test]
    fn users_round_trip_preserving_order_and_fields() {
        let store = MemoryStore::new();
        let mut bob = sample_user();
        bob.id = "2".to_string();
        bob.name = "Bob".to_string();
        bob.phone = None;
        let users = vec![sample_user(), bob];

        save_users(&store, keys::CUSTOMERS, &users).unwrap();
        assert_eq!(load_users(&store, keys::CUSTOMERS).unwrap(), users);
    }

    #[test]
    fn stored_shape_uses_camel_case_field_names() {
        let store = MemoryStore::new();
        let request = ServiceRequest {
            id: "1710000000001".to_string(),
            customer_name: "Alice".to_string(),
            phone: "0811".to_string(),
            issue: "cracked screen".to_string(),
            status: ServiceStatus::Pending,
            date: "2024-03-04T09:00:00Z".parse().unwrap(),
        };
        save_services(&store, &[request]).unwrap();

        let raw = store.get(keys::SERVICES).unwrap().unwrap();
        assert!(raw.contains("\"customerName\""));
        assert!(raw.contains("\"pending\""));
    }

    #[test]
    fn garbled_json_is_corrupt_not_empty() {
        let store = MemoryStore::new();
        store.set(keys::SERVICES, "{not json").unwrap();
        match load_services(&store) {
            Err(StoreError::Corrupt { key, .. }) => assert_eq!(key, keys::SERVICES),
            other => panic!("expected corrupt error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_status_is_corrupt() {
        let store = MemoryStore::new();
        store
            .set(
                keys::SERVICES,
                r#"[{"id":"1","customerName":"A","phone":"0811","issue":"x","status":"archived","date":"2024-03-04T09:00:00Z"}]"#,
            )
            .unwrap();
        assert!(matches!(
            load_services(&store),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn attendance_reads_records_written_by_earlier_versions() {
        let store = MemoryStore::new();
        store
            .set(
                keys::ATTENDANCES,
                r#"[{"id":"1709543200000","employeeId":"7","employeeName":"Dewi","clockIn":"2024-03-04T02:00:00.000Z","date":"2024-03-04T02:00:00.000Z"}]"#,
            )
            .unwrap();
        let entries = load_attendance(&store).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_open());
        assert_eq!(entries[0].employee_name, "Dewi");
    }
}
