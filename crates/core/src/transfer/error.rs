//! Error types for the transfer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a transfer. All are fatal to the run;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Destination already exists and overwrite is disabled. No copy was
    /// attempted and the existing file is untouched.
    #[error("Destination already exists: {path}")]
    DestinationConflict { path: PathBuf },

    /// The copy itself failed. Also covers the source disappearing between
    /// selection and copy.
    #[error("Failed to copy {source} to {destination}")]
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },
}
