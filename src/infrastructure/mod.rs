//! Infrastructure layer - concrete collaborators and the user service

pub mod export;
pub mod logging;
pub mod notification;
pub mod user;

pub use export::JsonFileExporter;
pub use notification::{LoggingNotificationSink, NotificationDispatcher};
pub use user::{
    CreateUserRequest, CredentialHasher, InMemoryUserRepository, Sha256Hasher, UserService,
};
