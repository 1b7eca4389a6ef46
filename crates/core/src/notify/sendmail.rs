//! Sendmail-backed notifier implementation.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::MailConfig;

use super::traits::Notifier;
use super::types::Notification;
use super::NotifyError;

/// Delivers notifications by piping an RFC 822 style message to a
/// sendmail-compatible command (`sendmail -t` by default).
pub struct SendmailNotifier {
    config: MailConfig,
}

impl SendmailNotifier {
    /// Creates a notifier for the given mail configuration.
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Builds the full message, headers included, for one notification.
    fn format_message(&self, notification: &Notification) -> String {
        let mut message = String::new();
        message.push_str(&format!("To: {}\n", notification.recipients.join(", ")));
        if let Some(from) = &self.config.from {
            message.push_str(&format!("From: {from}\n"));
        }
        message.push_str(&format!("Subject: {}\n", notification.subject));
        message.push_str(&format!(
            "X-Priority: {}\n",
            notification.priority.header_value()
        ));
        message.push('\n');
        message.push_str(&notification.body);
        message
    }
}

#[async_trait]
impl Notifier for SendmailNotifier {
    fn name(&self) -> &str {
        "sendmail"
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let command = &self.config.sendmail_command;
        let message = self.format_message(notification);

        let mut child = Command::new(command)
            .arg("-t")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| NotifyError::TransportFailed {
                command: command.clone(),
                source: e,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| NotifyError::TransportFailed {
            command: command.clone(),
            source: std::io::Error::other("stdin not captured"),
        })?;
        stdin
            .write_all(message.as_bytes())
            .await
            .map_err(|e| NotifyError::TransportFailed {
                command: command.clone(),
                source: e,
            })?;
        drop(stdin);

        let status = child
            .wait()
            .await
            .map_err(|e| NotifyError::TransportFailed {
                command: command.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(NotifyError::SendRejected {
                command: command.clone(),
                status: status.to_string(),
            });
        }

        tracing::info!(
            subject = %notification.subject,
            recipients = notification.recipients.len(),
            "Notification sent"
        );
        Ok(())
    }
}
