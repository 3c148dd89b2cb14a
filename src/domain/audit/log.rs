//! Append-only audit log

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// One recorded operation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl AuditEntry {
    fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

/// Ordered history of operation outcomes
///
/// Entries are only ever appended; nothing is mutated, removed or reordered.
/// Each entry is also emitted as a `tracing` event on target `audit`.
#[derive(Debug, Default, Clone)]
pub struct AuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` stamped with the current time
    ///
    /// The timestamp is taken while the write lock is held, so timestamps
    /// never run backwards against insertion order.
    pub async fn record(&self, message: impl Into<String>) {
        let message = message.into();
        let mut entries = self.entries.write().await;
        let entry = AuditEntry::now(message);
        info!(target: "audit", timestamp = %entry.timestamp, "{}", entry.message);
        entries.push(entry);
    }

    /// Snapshot of the full history in insertion order
    pub async fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_preserves_order() {
        let log = AuditLog::new();

        log.record("first").await;
        log.record("second").await;
        log.record("third").await;

        let messages: Vec<String> = log.entries().await.into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_timestamps_are_monotonic() {
        let log = AuditLog::new();

        log.record("a").await;
        log.record("b").await;

        let entries = log.entries().await;
        assert!(entries[0].timestamp <= entries[1].timestamp);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_records_keep_timestamps_ordered() {
        let log = AuditLog::new();

        let handles: Vec<_> = (0..8)
            .map(|task| {
                let log = log.clone();
                tokio::spawn(async move {
                    for i in 0..50 {
                        log.record(format!("task {} entry {}", task, i)).await;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let entries = log.entries().await;
        assert_eq!(entries.len(), 400);
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));
    }

    #[tokio::test]
    async fn test_snapshot_is_stable() {
        let log = AuditLog::new();
        log.record("before").await;

        let snapshot = log.entries().await;
        log.record("after").await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len().await, 2);
    }

    #[tokio::test]
    async fn test_entry_serialization() {
        let log = AuditLog::new();
        assert!(log.is_empty().await);
        log.record("User alice created successfully").await;

        let json = serde_json::to_value(&log.entries().await[0]).unwrap();
        assert!(json["timestamp"].is_string());
        assert_eq!(json["message"], "User alice created successfully");
    }
}
