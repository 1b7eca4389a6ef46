//! Transfer execution: destination path computation, overwrite policy and
//! the copy/move itself.

mod error;
mod executor;
mod types;

pub use error::TransferError;
pub use executor::{destination_path, execute};
pub use types::{SourceCleanup, TransferAction, TransferOutcome, TransferRequest};
