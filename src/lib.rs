//! User Accounts
//!
//! An in-process account management service with:
//! - Email format and password strength validation
//! - One-way SHA-256 credential digests
//! - An append-only audit trail of every attempted operation
//! - Best-effort, queued account notifications
//! - JSON export of account snapshots

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tokio::task::JoinHandle;

use infrastructure::{
    InMemoryUserRepository, JsonFileExporter, LoggingNotificationSink, NotificationDispatcher,
    Sha256Hasher, UserService,
};

/// The service wired with the in-process collaborators
pub type DefaultUserService = UserService<InMemoryUserRepository, Sha256Hasher>;

/// Build a fully configured user service
///
/// When notifications are enabled a worker task is spawned, so this must be
/// called inside a tokio runtime. The returned handle completes once the
/// service is dropped and queued notifications are delivered.
pub fn create_user_service(config: &AppConfig) -> (DefaultUserService, Option<JoinHandle<()>>) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(Sha256Hasher::new());
    let exporter = JsonFileExporter::new().with_pretty(config.export.pretty);

    let service = UserService::new(repository, hasher).with_exporter(Arc::new(exporter));

    if !config.notifications.enabled {
        return (service, None);
    }

    let (dispatcher, worker) = NotificationDispatcher::spawn(
        Arc::new(LoggingNotificationSink::new()),
        config.notifications.queue_capacity,
    );

    (service.with_notifications(dispatcher), Some(worker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::infrastructure::CreateUserRequest;

    #[tokio::test]
    async fn test_create_user_service_with_notifications() {
        let (service, worker) = create_user_service(&AppConfig::default());
        assert!(worker.is_some());

        service
            .create(
                CreateUserRequest::new("john_doe", "john@example.com")
                    .with_password("SecurePass123"),
            )
            .await
            .unwrap();
        assert!(service.delete("john_doe").await.unwrap());

        drop(service);
        worker.unwrap().await.unwrap();
    }

    #[tokio::test]
    async fn test_create_user_service_without_notifications() {
        let mut config = AppConfig::default();
        config.notifications.enabled = false;

        let (service, worker) = create_user_service(&config);
        assert!(worker.is_none());

        let error = service
            .create(CreateUserRequest::new("bob", "not-an-email"))
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidEmail);
    }
}
