//! Error types for the selector module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning the source directory.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// The source directory could not be listed (missing, no permission
    /// or any other I/O failure). Fatal to the run.
    #[error("Source directory unavailable: {path}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
