//! Executes a single transfer against the filesystem.

use std::path::PathBuf;
use tokio::fs;

use super::error::TransferError;
use super::types::{SourceCleanup, TransferAction, TransferOutcome, TransferRequest};

/// Computes the destination path for a request:
/// `destination_dir / (destination_name or source stem) + source extension`.
///
/// The source file's extension is always appended. A caller-supplied name
/// never changes it, even when that name itself contains a dot; renaming is
/// deliberately restricted to the base name.
pub fn destination_path(request: &TransferRequest) -> PathBuf {
    let base = request
        .destination_name
        .as_deref()
        .unwrap_or(&request.source.stem);
    let file_name = match &request.source.extension {
        Some(extension) => format!("{base}{extension}"),
        None => base.to_string(),
    };
    request.destination_dir.join(file_name)
}

/// Performs the copy (and for moves, the source deletion) for a single
/// request. Single attempt, fail-fast: any failure aborts the run.
///
/// Deleting the source after a successful move is best-effort; a failure
/// there is reported on the success outcome instead of failing the run.
pub async fn execute(request: &TransferRequest) -> Result<TransferOutcome, TransferError> {
    let destination = destination_path(request);

    if destination.exists() && !request.overwrite {
        return Err(TransferError::DestinationConflict { path: destination });
    }

    fs::copy(&request.source.path, &destination)
        .await
        .map_err(|e| TransferError::CopyFailed {
            source: request.source.path.clone(),
            destination: destination.clone(),
            error: e,
        })?;

    tracing::info!(
        source = %request.source.path.display(),
        destination = %destination.display(),
        action = request.action.verb(),
        "File transferred"
    );

    let cleanup = match request.action {
        TransferAction::Copy => None,
        TransferAction::Move => Some(remove_source(request).await),
    };

    Ok(TransferOutcome::Transferred {
        source_path: request.source.path.clone(),
        destination_path: destination,
        modified: request.source.modified,
        cleanup,
    })
}

async fn remove_source(request: &TransferRequest) -> SourceCleanup {
    match fs::remove_file(&request.source.path).await {
        Ok(()) => SourceCleanup::Removed,
        Err(e) => {
            tracing::warn!(
                source = %request.source.path.display(),
                "Failed to delete source file after move: {}",
                e
            );
            SourceCleanup::Failed {
                reason: e.to_string(),
            }
        }
    }
}
