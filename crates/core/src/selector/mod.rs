//! Source directory scanning and latest-file selection.

mod error;
mod scan;
mod types;

pub use error::SelectorError;
pub use scan::select_latest;
pub use types::{CandidateFile, SelectionCriteria};
