//! Notification domain
//!
//! Account lifecycle events delivered best-effort to the account's address.

mod sink;

pub use sink::{Notification, NotificationEvent, NotificationSink};
