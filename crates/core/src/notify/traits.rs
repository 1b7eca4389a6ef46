//! Trait definition for the mail boundary.

use async_trait::async_trait;

use super::types::Notification;
use super::NotifyError;

/// Delivers one notification per run to the operator.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the name of this notifier implementation.
    fn name(&self) -> &str;

    /// Sends a notification. Implementations perform a single attempt;
    /// the caller decides whether a failure here matters.
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}
