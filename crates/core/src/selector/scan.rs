//! Directory scan picking the most recently modified match.

use std::cmp::Ordering;
use std::path::Path;
use tokio::fs;

use super::error::SelectorError;
use super::types::{CandidateFile, SelectionCriteria};

/// Returns the most recently modified regular file in the source directory
/// matching the criteria, or `None` when nothing matches.
///
/// The scan is non-recursive. The extension filter is a case-insensitive
/// suffix match, the prefix filter a case-sensitive one. Ties on the
/// modification time are broken by lexicographic file-name order so the
/// result is deterministic for a fixed snapshot.
pub async fn select_latest(
    criteria: &SelectionCriteria,
) -> Result<Option<CandidateFile>, SelectorError> {
    let mut entries =
        fs::read_dir(&criteria.source_dir)
            .await
            .map_err(|e| SelectorError::DirectoryUnavailable {
                path: criteria.source_dir.clone(),
                source: e,
            })?;

    let mut best: Option<CandidateFile> = None;
    let mut scanned = 0usize;

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                return Err(SelectorError::DirectoryUnavailable {
                    path: criteria.source_dir.clone(),
                    source: e,
                });
            }
        };

        let file_type = match entry.file_type().await {
            Ok(ft) => ft,
            // Entry vanished between listing and stat, skip it.
            Err(_) => continue,
        };
        if !file_type.is_file() {
            continue;
        }
        scanned += 1;

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !matches_filters(&file_name, criteria) {
            continue;
        }

        let modified = match entry.metadata().await.and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(_) => continue,
        };

        let replace = match &best {
            None => true,
            Some(current) => match modified.cmp(&current.modified) {
                Ordering::Greater => true,
                Ordering::Equal => file_name < current.file_name,
                Ordering::Less => false,
            },
        };

        if replace {
            best = Some(snapshot(&entry.path(), file_name, modified));
        }
    }

    tracing::debug!(
        source_dir = %criteria.source_dir.display(),
        scanned,
        selected = best.as_ref().map(|c| c.file_name.as_str()),
        "Source directory scan complete"
    );

    Ok(best)
}

fn matches_filters(file_name: &str, criteria: &SelectionCriteria) -> bool {
    if let Some(prefix) = &criteria.name_prefix {
        if !file_name.starts_with(prefix.as_str()) {
            return false;
        }
    }
    if let Some(extension) = &criteria.extension {
        let suffix = normalized_extension(extension);
        if !file_name.to_lowercase().ends_with(&suffix) {
            return false;
        }
    }
    true
}

/// Lowercases the configured extension and ensures a leading dot, so
/// "CSV" and ".csv" both match "report.csv".
fn normalized_extension(extension: &str) -> String {
    let lowered = extension.to_lowercase();
    if lowered.starts_with('.') {
        lowered
    } else {
        format!(".{lowered}")
    }
}

fn snapshot(path: &Path, file_name: String, modified: std::time::SystemTime) -> CandidateFile {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.clone());
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()));

    CandidateFile {
        path: path.to_path_buf(),
        file_name,
        stem,
        extension,
        modified,
    }
}
