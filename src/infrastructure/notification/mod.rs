//! Notification infrastructure
//!
//! A channel-backed dispatcher that keeps delivery off the caller's path,
//! and a sink that logs the rendered mails.

mod dispatcher;
mod logging_sink;

pub use dispatcher::NotificationDispatcher;
pub use logging_sink::LoggingNotificationSink;
