//! Queued, fire-and-forget notification delivery

use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::notification::{Notification, NotificationSink};

/// Handle for queueing notifications to a background worker
///
/// `dispatch` never awaits and never retries. The worker task stops once
/// every clone of the dispatcher has been dropped and the queue is drained.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::Sender<Notification>,
}

impl NotificationDispatcher {
    /// Start a worker delivering to `sink` with a queue of `capacity` messages
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(sink: Arc<dyn NotificationSink>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (sender, mut receiver) = mpsc::channel::<Notification>(capacity.max(1));

        let handle = tokio::spawn(async move {
            while let Some(notification) = receiver.recv().await {
                match sink.notify(&notification).await {
                    Ok(()) => debug!(
                        user_id = %notification.user_id,
                        event = %notification.event,
                        "Notification delivered"
                    ),
                    Err(e) => warn!(
                        user_id = %notification.user_id,
                        event = %notification.event,
                        error = %e,
                        "Notification delivery failed"
                    ),
                }
            }
            debug!("Notification worker stopped");
        });

        (Self { sender }, handle)
    }

    /// Queue a notification; drops it with a warning if the queue is unavailable
    pub fn dispatch(&self, notification: Notification) {
        match self.sender.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => warn!(
                user_id = %dropped.user_id,
                event = %dropped.event,
                "Notification queue full, dropping notification"
            ),
            Err(TrySendError::Closed(dropped)) => warn!(
                user_id = %dropped.user_id,
                event = %dropped.event,
                "Notification worker stopped, dropping notification"
            ),
        }
    }
}
