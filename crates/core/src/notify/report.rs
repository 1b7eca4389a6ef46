//! Renders the run outcome into a human-readable notification.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

use crate::config::Config;
use crate::transfer::{SourceCleanup, TransferOutcome};

use super::types::{Notification, Priority};

/// Builds the operator notification for a finished run.
///
/// Subject convention: "File copied" / "File moved" on success,
/// "No file copied" / "No file moved" when nothing matched, "FAILURE" on a
/// fatal error. Priority is Normal except for failures.
pub fn render(outcome: &TransferOutcome, config: &Config) -> Notification {
    let past = config.action.past_tense();
    let request_line = describe_request(config);

    let (subject, priority, detail) = match outcome {
        TransferOutcome::Transferred {
            source_path,
            destination_path,
            modified,
            cleanup,
        } => {
            let mut detail = format!(
                "{} '{}' (last modified {}) to '{}'.",
                capitalize(past),
                source_path.display(),
                format_timestamp(*modified),
                destination_path.display(),
            );
            if let Some(SourceCleanup::Failed { reason }) = cleanup {
                detail.push_str(&format!(
                    "\nWarning: the source file could not be deleted after the move: {reason}"
                ));
            }
            (format!("File {past}"), Priority::Normal, detail)
        }
        TransferOutcome::NoMatch {
            source_dir,
            criteria,
        } => (
            format!("No file {past}"),
            Priority::Normal,
            format!(
                "No file matching {} was found in '{}'. Nothing was {past}.",
                criteria.describe(),
                source_dir.display(),
            ),
        ),
        TransferOutcome::Failed { reason } => (
            "FAILURE".to_string(),
            Priority::High,
            format!("The run aborted: {reason}"),
        ),
    };

    Notification {
        subject,
        body: format!("{request_line}\n\n{detail}\n"),
        priority,
        recipients: config.mail.to.clone(),
    }
}

fn describe_request(config: &Config) -> String {
    let mut line = format!(
        "Requested: {} the most recently edited file with {} from '{}' to '{}'",
        config.action.verb(),
        config.selection_criteria().describe(),
        config.source_folder.display(),
        config.destination_folder.display(),
    );
    if let Some(name) = &config.destination_file_name {
        line.push_str(&format!(" as '{name}'"));
    }
    line.push_str(if config.overwrite {
        ", overwriting an existing file."
    } else {
        ", not overwriting an existing file."
    });
    line
}

fn format_timestamp(modified: SystemTime) -> String {
    DateTime::<Utc>::from(modified)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
