//! Domain layer - Core business logic and entities

pub mod audit;
pub mod error;
pub mod export;
pub mod notification;
pub mod user;

pub use audit::{AuditEntry, AuditLog};
pub use error::{DomainError, ErrorKind};
pub use export::UserExporter;
pub use notification::{Notification, NotificationEvent, NotificationSink};
pub use user::{UpdateUserRequest, User, UserId, UserRepository, UserView};
