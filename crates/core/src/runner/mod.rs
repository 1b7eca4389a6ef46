//! One full run: scan, select, transfer, report.

use crate::config::Config;
use crate::notify::{render, Notifier};
use crate::selector::select_latest;
use crate::transfer::{self, TransferOutcome, TransferRequest};

/// How a run ended, for exit-code mapping. Only `Failed` is an error
/// condition; finding no matching file is a normal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// A file was transferred.
    Success,
    /// Nothing matched the criteria; no I/O was performed.
    NoMatch,
    /// The run aborted on a fatal error.
    Failed,
}

impl RunStatus {
    /// Process exit code for this status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success | Self::NoMatch => 0,
            Self::Failed => 1,
        }
    }
}

/// Executes one run end to end and reports the outcome through the
/// notifier.
///
/// The run is sequential with no retries: the first fatal error aborts it.
/// The notification is best-effort; a send failure is logged but never
/// changes the run's own status.
pub async fn run_once(config: &Config, notifier: &dyn Notifier) -> RunStatus {
    let criteria = config.selection_criteria();

    let (outcome, status) = match select_latest(&criteria).await {
        Err(e) => {
            tracing::error!("Selection failed: {}", e);
            (
                TransferOutcome::Failed {
                    reason: e.to_string(),
                },
                RunStatus::Failed,
            )
        }
        Ok(None) => {
            tracing::info!(
                source_dir = %criteria.source_dir.display(),
                "No file matched the selection criteria"
            );
            (
                TransferOutcome::NoMatch {
                    source_dir: criteria.source_dir.clone(),
                    criteria,
                },
                RunStatus::NoMatch,
            )
        }
        Ok(Some(candidate)) => {
            let request = TransferRequest {
                action: config.action,
                source: candidate,
                destination_dir: config.destination_folder.clone(),
                destination_name: config.destination_file_name.clone(),
                overwrite: config.overwrite,
            };
            match transfer::execute(&request).await {
                Ok(outcome) => (outcome, RunStatus::Success),
                Err(e) => {
                    tracing::error!("Transfer failed: {}", e);
                    (
                        TransferOutcome::Failed {
                            reason: e.to_string(),
                        },
                        RunStatus::Failed,
                    )
                }
            }
        }
    };

    let notification = render(&outcome, config);
    if let Err(e) = notifier.send(&notification).await {
        tracing::error!("Failed to deliver run report: {}", e);
    }

    status
}
