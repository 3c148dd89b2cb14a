//! Notification sink trait and message types

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Account lifecycle events that trigger a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    AccountCreated,
    AccountDeleted,
}

impl NotificationEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountCreated => "account_created",
            Self::AccountDeleted => "account_deleted",
        }
    }
}

impl std::fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A queued notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient address
    pub address: String,
    pub event: NotificationEvent,
    /// The account the event is about
    pub user_id: UserId,
}

impl Notification {
    pub fn new(address: impl Into<String>, event: NotificationEvent, user_id: UserId) -> Self {
        Self {
            address: address.into(),
            event,
            user_id,
        }
    }
}

/// Delivery mechanism for notifications
///
/// Failures are reported to the caller of `notify` only; the account
/// operation that produced the notification never sees them.
#[async_trait]
pub trait NotificationSink: Send + Sync + Debug {
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError>;
}
