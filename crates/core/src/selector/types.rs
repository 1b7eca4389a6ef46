//! Types for the selector module.

use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

/// Filters applied when scanning the source directory.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionCriteria {
    /// Directory whose direct entries are scanned (non-recursive).
    pub source_dir: PathBuf,
    /// Extension filter, e.g. ".csv". Matched case-insensitively as a
    /// suffix of the file name; a missing leading dot is tolerated.
    pub extension: Option<String>,
    /// Literal prefix filter on the base name, matched case-sensitively.
    pub name_prefix: Option<String>,
}

impl SelectionCriteria {
    /// Criteria without any filters: every regular file is a candidate.
    pub fn all_files(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            extension: None,
            name_prefix: None,
        }
    }

    /// Human-readable summary of the active filters, used in reports.
    pub fn describe(&self) -> String {
        match (&self.extension, &self.name_prefix) {
            (Some(ext), Some(prefix)) => {
                format!("extension '{ext}' and name starting with '{prefix}'")
            }
            (Some(ext), None) => format!("extension '{ext}'"),
            (None, Some(prefix)) => format!("name starting with '{prefix}'"),
            (None, None) => "any name".to_string(),
        }
    }
}

/// Immutable snapshot of the selected file, taken at scan time.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateFile {
    /// Full path of the file.
    pub path: PathBuf,
    /// Base name including the extension.
    pub file_name: String,
    /// Base name without the extension.
    pub stem: String,
    /// Extension including the leading dot, if the file has one.
    pub extension: Option<String>,
    /// Last modification time at scan time.
    pub modified: SystemTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_with_both_filters() {
        let criteria = SelectionCriteria {
            source_dir: PathBuf::from("/in"),
            extension: Some(".csv".to_string()),
            name_prefix: Some("report".to_string()),
        };
        assert_eq!(
            criteria.describe(),
            "extension '.csv' and name starting with 'report'"
        );
    }

    #[test]
    fn test_describe_without_filters() {
        let criteria = SelectionCriteria::all_files("/in");
        assert_eq!(criteria.describe(), "any name");
    }
}
