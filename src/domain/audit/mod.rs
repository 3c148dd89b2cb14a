//! Audit domain - the record of every attempted operation

mod log;

pub use log::{AuditEntry, AuditLog};
