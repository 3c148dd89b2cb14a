//! Notification sink that writes messages to the log

use async_trait::async_trait;
use tracing::info;

use crate::domain::notification::{Notification, NotificationEvent, NotificationSink};
use crate::domain::DomainError;

/// Renders account mails and logs them instead of sending
#[derive(Debug, Clone, Default)]
pub struct LoggingNotificationSink;

impl LoggingNotificationSink {
    pub fn new() -> Self {
        Self
    }

    /// Body of the mail sent for `notification`
    pub fn render(notification: &Notification) -> String {
        match notification.event {
            NotificationEvent::AccountCreated => format!(
                "Welcome {}! Your account has been created successfully.",
                notification.user_id
            ),
            NotificationEvent::AccountDeleted => format!(
                "Goodbye {}! Your account has been deleted.",
                notification.user_id
            ),
        }
    }
}

#[async_trait]
impl NotificationSink for LoggingNotificationSink {
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError> {
        let message = Self::render(notification);
        info!(
            address = %notification.address,
            event = %notification.event,
            "Email sent: {}",
            message
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[test]
    fn test_render_welcome() {
        let notification = Notification::new(
            "john@example.com",
            NotificationEvent::AccountCreated,
            UserId::new("john_doe"),
        );

        assert_eq!(
            LoggingNotificationSink::render(&notification),
            "Welcome john_doe! Your account has been created successfully."
        );
    }

    #[test]
    fn test_render_goodbye() {
        let notification = Notification::new(
            "jane@example.com",
            NotificationEvent::AccountDeleted,
            UserId::new("jane_smith"),
        );

        assert_eq!(
            LoggingNotificationSink::render(&notification),
            "Goodbye jane_smith! Your account has been deleted."
        );
    }

    #[tokio::test]
    async fn test_notify_succeeds() {
        let sink = LoggingNotificationSink::new();
        let notification = Notification::new(
            "john@example.com",
            NotificationEvent::AccountCreated,
            UserId::new("john_doe"),
        );

        assert!(sink.notify(&notification).await.is_ok());
    }
}
