pub mod domain;
pub mod ports;

pub use domain::{AttendanceEntry, Role, ServiceRequest, ServiceStatus, User};
pub use ports::{Authenticator, Clock, KeyValueStore, StoreError, StoreResult, SystemClock};
