use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::selector::SelectionCriteria;
use crate::transfer::TransferAction;

/// Root configuration for one run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Whether to copy or move the selected file.
    pub action: TransferAction,
    /// Directory scanned for candidates (non-recursive).
    pub source_folder: PathBuf,
    /// Directory the selected file is transferred to.
    pub destination_folder: PathBuf,
    /// Replacement base name for the destination file. The source file's
    /// extension is appended regardless of this value.
    #[serde(default)]
    pub destination_file_name: Option<String>,
    /// Extension filter, e.g. ".csv". Case-insensitive suffix match.
    #[serde(default)]
    pub file_extension: Option<String>,
    /// Case-sensitive prefix filter on the file name.
    #[serde(default)]
    pub file_name_starts_with: Option<String>,
    /// Whether an existing destination file is replaced. When false, an
    /// existing file fails the run.
    #[serde(default)]
    pub overwrite: bool,
    /// Outcome report delivery.
    pub mail: MailConfig,
}

impl Config {
    /// Selection filters derived from this configuration.
    pub fn selection_criteria(&self) -> SelectionCriteria {
        SelectionCriteria {
            source_dir: self.source_folder.clone(),
            extension: self.file_extension.clone(),
            name_prefix: self.file_name_starts_with.clone(),
        }
    }
}

/// Mail delivery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Report recipients. At least one is required.
    pub to: Vec<String>,
    /// Sender address, if the transport does not supply one.
    #[serde(default)]
    pub from: Option<String>,
    /// Sendmail-compatible command the report is piped to.
    #[serde(default = "default_sendmail_command")]
    pub sendmail_command: String,
}

fn default_sendmail_command() -> String {
    "/usr/sbin/sendmail".to_string()
}
