//! Types for the transfer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::selector::{CandidateFile, SelectionCriteria};

/// What to do with the selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferAction {
    /// Copy the file, leaving the source in place.
    Copy,
    /// Copy the file, then delete the source.
    Move,
}

impl TransferAction {
    /// Lowercase verb for log and report text ("copy" / "move").
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
        }
    }

    /// Past tense for subjects and bodies ("copied" / "moved").
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Copy => "copied",
            Self::Move => "moved",
        }
    }
}

/// A single transfer, derived once from the selected candidate plus
/// configuration.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub action: TransferAction,
    pub source: CandidateFile,
    pub destination_dir: PathBuf,
    /// Replacement base name for the destination file. The source file's
    /// extension is always appended, even if this name contains a dot;
    /// renaming never changes the extension.
    pub destination_name: Option<String>,
    pub overwrite: bool,
}

/// Result of deleting the source after a successful move.
///
/// Deletion failure does not fail the run; it is carried on the success
/// outcome so the report can flag it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SourceCleanup {
    /// Source file deleted.
    Removed,
    /// Source file could not be deleted; the transfer itself succeeded.
    Failed { reason: String },
}

/// Terminal result of a run, handed to the notification boundary.
///
/// Carries everything a report needs without re-touching the filesystem.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum TransferOutcome {
    /// The candidate was transferred to its destination.
    Transferred {
        source_path: PathBuf,
        destination_path: PathBuf,
        modified: SystemTime,
        /// Present for move actions only.
        #[serde(skip_serializing_if = "Option::is_none")]
        cleanup: Option<SourceCleanup>,
    },
    /// No file matched the criteria. Not an error; no I/O was performed.
    NoMatch {
        source_dir: PathBuf,
        criteria: SelectionCriteria,
    },
    /// The run aborted on a fatal error.
    Failed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wording() {
        assert_eq!(TransferAction::Copy.verb(), "copy");
        assert_eq!(TransferAction::Copy.past_tense(), "copied");
        assert_eq!(TransferAction::Move.verb(), "move");
        assert_eq!(TransferAction::Move.past_tense(), "moved");
    }

    #[test]
    fn test_action_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Holder {
            action: TransferAction,
        }

        let holder: Holder = toml::from_str("action = \"move\"").unwrap();
        assert_eq!(holder.action, TransferAction::Move);
        let holder: Holder = toml::from_str("action = \"copy\"").unwrap();
        assert_eq!(holder.action, TransferAction::Copy);
    }
}
