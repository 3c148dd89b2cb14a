//! JSON file exporter

use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::export::UserExporter;
use crate::domain::user::UserView;
use crate::domain::DomainError;

/// Writes the account map as a JSON object keyed by identifier
#[derive(Debug, Clone)]
pub struct JsonFileExporter {
    pretty: bool,
}

impl JsonFileExporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Toggle indented output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonFileExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserExporter for JsonFileExporter {
    async fn export(
        &self,
        users: &BTreeMap<String, UserView>,
        destination: &str,
    ) -> Result<(), DomainError> {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(users)
        } else {
            serde_json::to_string(users)
        };
        let body = serialized
            .map_err(|e| DomainError::internal(format!("Failed to serialize users: {}", e)))?;

        tokio::fs::write(destination, body)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to write {}: {}", destination, e)))?;

        debug!(destination = %destination, count = users.len(), "Users written");
        Ok(())
    }
}
