//! Mock notifier for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::notify::{Notification, Notifier, NotifyError};

/// Mock implementation of the Notifier trait.
///
/// Records every notification for assertions and can be told to fail the
/// next send.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    sent: Arc<RwLock<Vec<Notification>>>,
    fail_next: Arc<RwLock<bool>>,
}

impl MockNotifier {
    /// Create a new mock notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications sent so far.
    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.read().await.clone()
    }

    /// Number of notifications sent.
    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }

    /// Make the next send fail with a transport error.
    pub async fn fail_next_send(&self) {
        *self.fail_next.write().await = true;
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        if std::mem::take(&mut *self.fail_next.write().await) {
            return Err(NotifyError::SendRejected {
                command: "mock".to_string(),
                status: "simulated failure".to_string(),
            });
        }
        self.sent.write().await.push(notification.clone());
        Ok(())
    }
}
