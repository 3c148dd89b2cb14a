//! Application configuration

mod app_config;

pub use app_config::{AppConfig, ExportConfig, LogFormat, LoggingConfig, NotificationConfig};
