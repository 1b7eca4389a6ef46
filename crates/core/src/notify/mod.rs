//! Outcome reporting: notification rendering and the mail boundary.
//!
//! The core never sends mail itself; it renders a [`Notification`] from the
//! run's outcome and hands it to a [`Notifier`] implementation.

mod report;
mod sendmail;
mod traits;
mod types;

use thiserror::Error;

pub use report::render;
pub use sendmail::SendmailNotifier;
pub use traits::Notifier;
pub use types::{Notification, Priority};

/// Errors from the notification transport.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The transport could not be spawned or written to.
    #[error("Failed to run mail command '{command}'")]
    TransportFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The transport ran but reported failure.
    #[error("Mail command '{command}' exited with {status}")]
    SendRejected { command: String, status: String },
}
