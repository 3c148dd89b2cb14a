//! User service orchestrating validation, storage, audit and notifications

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::export::UserExporter;
use crate::domain::notification::{Notification, NotificationEvent};
use crate::domain::user::{
    validate_email, validate_password, UpdateUserRequest, User, UserId, UserRepository, UserView,
};
use crate::domain::{AuditEntry, AuditLog, DomainError};
use crate::infrastructure::notification::NotificationDispatcher;

use super::digest::CredentialHasher;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub id: String,
    pub email: String,
    /// Plaintext credential; only its digest is stored
    pub password: Option<String>,
}

impl CreateUserRequest {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// User service for account management
///
/// Every public operation appends exactly one entry to the audit log,
/// whether it succeeds or fails. Mutating operations are serialized so the
/// existence check and the write of `create` cannot interleave with another
/// mutation.
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: CredentialHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
    audit: AuditLog,
    notifications: Option<NotificationDispatcher>,
    exporter: Option<Arc<dyn UserExporter>>,
    write_lock: Mutex<()>,
}

impl<R: UserRepository, H: CredentialHasher> UserService<R, H> {
    /// Create a new user service with its own audit log
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            repository,
            hasher,
            audit: AuditLog::new(),
            notifications: None,
            exporter: None,
            write_lock: Mutex::new(()),
        }
    }

    /// Send account notifications through `dispatcher`
    pub fn with_notifications(mut self, dispatcher: NotificationDispatcher) -> Self {
        self.notifications = Some(dispatcher);
        self
    }

    /// Enable [`UserService::export_users`]
    pub fn with_exporter(mut self, exporter: Arc<dyn UserExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserView, DomainError> {
        let user_id = UserId::new(request.id);
        let failure = |reason: &str| format!("Failed to create user {}: {}", user_id, reason);

        if let Err(e) = validate_email(&request.email) {
            return Err(self
                .reject(failure("Invalid email"), DomainError::invalid_email(e.to_string()))
                .await);
        }

        if let Some(password) = &request.password {
            if let Err(e) = validate_password(password) {
                return Err(self
                    .reject(failure("Weak password"), DomainError::weak_credential(e.to_string()))
                    .await);
            }
        }

        let _guard = self.write_lock.lock().await;

        match self.repository.exists(&user_id).await {
            Ok(false) => {}
            Ok(true) => {
                let error =
                    DomainError::already_exists(format!("User '{}' already exists", user_id));
                return Err(self.reject(failure("User already exists"), error).await);
            }
            Err(e) => return Err(self.reject(failure(&e.to_string()), e).await),
        }

        let digest = request
            .password
            .as_deref()
            .map(|password| self.hasher.digest(password));
        let user = User::new(user_id.clone(), request.email, digest);
        let view = user.to_view();

        if let Err(e) = self.repository.save(user).await {
            return Err(self.reject(failure(&e.to_string()), e).await);
        }

        self.audit
            .record(format!("User {} created successfully", user_id))
            .await;
        info!(user_id = %user_id, "User created");

        self.notify(&view.email, NotificationEvent::AccountCreated, &user_id);

        Ok(view)
    }

    /// Get a user by identifier; an unknown identifier is `Ok(None)`
    pub async fn get(&self, id: &str) -> Result<Option<UserView>, DomainError> {
        let user_id = UserId::new(id);

        match self.repository.find_by_id(&user_id).await {
            Ok(Some(user)) => {
                self.audit
                    .record(format!("User {} retrieved successfully", user_id))
                    .await;
                Ok(Some(user.to_view()))
            }
            Ok(None) => {
                self.audit
                    .record(format!("Failed to retrieve user {}: User not found", user_id))
                    .await;
                Ok(None)
            }
            Err(e) => {
                let message = format!("Failed to retrieve user {}: {}", user_id, e);
                Err(self.reject(message, e).await)
            }
        }
    }

    /// Apply the recognized field changes in `request` to an existing user
    pub async fn update(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> Result<UserView, DomainError> {
        let user_id = UserId::new(id);
        let failure = |reason: &str| format!("Failed to update user {}: {}", user_id, reason);

        if request.is_empty() {
            debug!(user_id = %user_id, "Update carries no recognized fields");
        }

        let _guard = self.write_lock.lock().await;

        let mut user = match self.repository.find_by_id(&user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                let error = DomainError::not_found(format!("User '{}' not found", user_id));
                return Err(self.reject(failure("User not found"), error).await);
            }
            Err(e) => return Err(self.reject(failure(&e.to_string()), e).await),
        };

        if let Some(email) = &request.email {
            if let Err(e) = validate_email(email) {
                return Err(self
                    .reject(failure("Invalid email"), DomainError::invalid_email(e.to_string()))
                    .await);
            }
        }

        let digest = match &request.password {
            Some(password) => match validate_password(password) {
                Ok(()) => Some(self.hasher.digest(password)),
                Err(e) => {
                    return Err(self
                        .reject(
                            failure("Weak password"),
                            DomainError::weak_credential(e.to_string()),
                        )
                        .await);
                }
            },
            None => None,
        };

        if let Some(email) = request.email {
            user.set_email(email);
        }
        if let Some(active) = request.active {
            user.set_active(active);
        }
        if let Some(digest) = digest {
            user.set_credential_digest(digest);
        }

        let view = user.to_view();

        if let Err(e) = self.repository.save(user).await {
            return Err(self.reject(failure(&e.to_string()), e).await);
        }

        self.audit
            .record(format!("User {} updated successfully", user_id))
            .await;
        info!(user_id = %user_id, "User updated");

        Ok(view)
    }

    /// Delete a user; returns true on success and errors otherwise
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let user_id = UserId::new(id);
        let failure = |reason: &str| format!("Failed to delete user {}: {}", user_id, reason);
        let not_found = || DomainError::not_found(format!("User '{}' not found", user_id));

        let _guard = self.write_lock.lock().await;

        let user = match self.repository.find_by_id(&user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(self.reject(failure("User not found"), not_found()).await),
            Err(e) => return Err(self.reject(failure(&e.to_string()), e).await),
        };

        match self.repository.delete(&user_id).await {
            Ok(true) => {}
            Ok(false) => return Err(self.reject(failure("User not found"), not_found()).await),
            Err(e) => return Err(self.reject(failure(&e.to_string()), e).await),
        }

        self.audit
            .record(format!("User {} deleted successfully", user_id))
            .await;
        info!(user_id = %user_id, "User deleted");

        self.notify(user.email(), NotificationEvent::AccountDeleted, &user_id);

        Ok(true)
    }

    /// List all users in repository order
    pub async fn list(&self) -> Result<Vec<UserView>, DomainError> {
        match self.repository.find_all().await {
            Ok(users) => {
                self.audit.record("User list retrieved").await;
                Ok(users.iter().map(User::to_view).collect())
            }
            Err(e) => {
                let message = format!("Failed to list users: {}", e);
                Err(self.reject(message, e).await)
            }
        }
    }

    /// Export every user to `destination`; failures are audited, not raised
    pub async fn export_users(&self, destination: &str) -> bool {
        let Some(exporter) = &self.exporter else {
            self.audit
                .record("Failed to export data: no exporter configured")
                .await;
            return false;
        };

        let result = match self.repository.find_all().await {
            Ok(users) => {
                let views: BTreeMap<String, UserView> = users
                    .iter()
                    .map(|user| (user.id().as_str().to_string(), user.to_view()))
                    .collect();
                exporter.export(&views, destination).await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.audit
                    .record(format!("Data exported to {}", destination))
                    .await;
                true
            }
            Err(e) => {
                warn!(destination = %destination, error = %e, "Export failed");
                self.audit
                    .record(format!("Failed to export data: {}", e))
                    .await;
                false
            }
        }
    }

    /// Snapshot of the audit trail
    pub async fn audit_entries(&self) -> Vec<AuditEntry> {
        self.audit.entries().await
    }

    /// The audit log owned by this service
    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    async fn reject(&self, message: String, error: DomainError) -> DomainError {
        warn!(kind = ?error.kind(), "{}", message);
        self.audit.record(message).await;
        error
    }

    fn notify(&self, address: &str, event: NotificationEvent, user_id: &UserId) {
        if let Some(dispatcher) = &self.notifications {
            dispatcher.dispatch(Notification::new(address, event, user_id.clone()));
        }
    }
}
