//! Run lifecycle integration tests.
//!
//! These drive a full run (scan -> select -> transfer -> report) against
//! real temp directories with a mock notifier:
//! - latest-file selection with and without filters
//! - copy vs move source handling
//! - renaming and the extension restriction
//! - overwrite policy and conflict failures
//! - report subjects and priorities

use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use dropship_core::{
    load_config_from_str, run_once, Config, Priority, RunStatus, testing::MockNotifier,
};

/// Test helper holding the directories and notifier for one run.
struct TestHarness {
    source_dir: TempDir,
    dest_dir: TempDir,
    notifier: MockNotifier,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            source_dir: TempDir::new().expect("Failed to create source dir"),
            dest_dir: TempDir::new().expect("Failed to create dest dir"),
            notifier: MockNotifier::new(),
        }
    }

    fn config(&self, extra: &str) -> Config {
        load_config_from_str(&format!(
            r#"
source_folder = "{}"
destination_folder = "{}"
{extra}

[mail]
to = ["ops@example.com"]
"#,
            self.source_dir.path().display(),
            self.dest_dir.path().display(),
        ))
        .expect("Failed to build test config")
    }

    /// Writes files in order with small gaps so modification times ascend.
    async fn write_spaced(&self, names: &[&str]) {
        for name in names {
            std::fs::write(self.source_dir.path().join(name), *name)
                .expect("Failed to write source file");
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }

    fn dest_path(&self, name: &str) -> std::path::PathBuf {
        self.dest_dir.path().join(name)
    }

    fn dest_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dest_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    async fn last_notification(&self) -> dropship_core::Notification {
        let sent = self.notifier.sent().await;
        assert_eq!(sent.len(), 1, "expected exactly one notification per run");
        sent.into_iter().next().unwrap()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}

#[tokio::test]
async fn test_copy_latest_overall_file() {
    let harness = TestHarness::new();
    harness
        .write_spaced(&["1.txt", "2.txt", "3.txt", "1.csv", "2.csv", "1.xlsx"])
        .await;

    let config = harness.config(r#"action = "copy""#);
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Success);
    assert_eq!(harness.dest_entries(), vec!["1.xlsx"]);
    // Copy keeps the source in place, byte-identical.
    assert!(harness.source_dir.path().join("1.xlsx").exists());
    assert_eq!(read(&harness.dest_path("1.xlsx")), "1.xlsx");

    let notification = harness.last_notification().await;
    assert_eq!(notification.subject, "File copied");
    assert_eq!(notification.priority, Priority::Normal);
    assert_eq!(notification.recipients, vec!["ops@example.com"]);
}

#[tokio::test]
async fn test_extension_filter_picks_latest_match() {
    let harness = TestHarness::new();
    harness
        .write_spaced(&["1.txt", "2.txt", "3.txt", "1.csv", "2.csv", "1.xlsx"])
        .await;

    let config = harness.config(
        r#"action = "copy"
file_extension = ".csv""#,
    );
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Success);
    assert_eq!(harness.dest_entries(), vec!["2.csv"]);
}

#[tokio::test]
async fn test_move_removes_source() {
    let harness = TestHarness::new();
    harness.write_spaced(&["export.csv"]).await;

    let config = harness.config(r#"action = "move""#);
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Success);
    assert!(!harness.source_dir.path().join("export.csv").exists());
    assert_eq!(read(&harness.dest_path("export.csv")), "export.csv");

    let notification = harness.last_notification().await;
    assert_eq!(notification.subject, "File moved");
}

#[tokio::test]
async fn test_rename_uses_source_extension() {
    let harness = TestHarness::new();
    harness.write_spaced(&["report.final.csv"]).await;

    let config = harness.config(
        r#"action = "copy"
destination_file_name = "A""#,
    );
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Success);
    assert_eq!(harness.dest_entries(), vec!["A.csv"]);
}

#[tokio::test]
async fn test_conflict_without_overwrite_fails_and_preserves_destination() {
    let harness = TestHarness::new();
    harness.write_spaced(&["export.csv"]).await;
    std::fs::write(harness.dest_path("export.csv"), "existing").unwrap();

    let config = harness.config(r#"action = "copy""#);
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(status.exit_code(), 1);
    assert_eq!(read(&harness.dest_path("export.csv")), "existing");

    let notification = harness.last_notification().await;
    assert_eq!(notification.subject, "FAILURE");
    assert_eq!(notification.priority, Priority::High);
    assert!(notification.body.contains("already exists"));
}

#[tokio::test]
async fn test_overwrite_replaces_destination_content() {
    let harness = TestHarness::new();
    harness.write_spaced(&["export.csv"]).await;
    std::fs::write(harness.dest_path("export.csv"), "existing").unwrap();

    let config = harness.config(
        r#"action = "copy"
overwrite = true"#,
    );
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Success);
    assert_eq!(read(&harness.dest_path("export.csv")), "export.csv");
}

#[tokio::test]
async fn test_no_match_leaves_destination_unchanged() {
    let harness = TestHarness::new();
    harness.write_spaced(&["a.zip", "b.zip"]).await;

    let config = harness.config(
        r#"action = "copy"
file_extension = ".zip"
file_name_starts_with = "notfound""#,
    );
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::NoMatch);
    assert_eq!(status.exit_code(), 0);
    assert!(harness.dest_entries().is_empty());

    let notification = harness.last_notification().await;
    assert_eq!(notification.subject, "No file copied");
    assert_eq!(notification.priority, Priority::Normal);
}

#[tokio::test]
async fn test_no_match_with_move_action_subject() {
    let harness = TestHarness::new();

    let config = harness.config(r#"action = "move""#);
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::NoMatch);
    let notification = harness.last_notification().await;
    assert_eq!(notification.subject, "No file moved");
}

#[tokio::test]
async fn test_prefix_and_extension_filters_combined() {
    let harness = TestHarness::new();
    harness
        .write_spaced(&["daily_1.csv", "weekly_1.csv", "daily_2.csv", "daily_3.txt"])
        .await;

    let config = harness.config(
        r#"action = "copy"
file_extension = ".csv"
file_name_starts_with = "daily""#,
    );
    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Success);
    assert_eq!(harness.dest_entries(), vec!["daily_2.csv"]);
}

#[tokio::test]
async fn test_missing_source_directory_reports_failure() {
    let harness = TestHarness::new();
    let mut config = harness.config(r#"action = "copy""#);
    config.source_folder = "/nonexistent/dropship-src".into();

    let status = run_once(&config, &harness.notifier).await;

    assert_eq!(status, RunStatus::Failed);
    let notification = harness.last_notification().await;
    assert_eq!(notification.subject, "FAILURE");
    assert!(notification.body.contains("Source directory unavailable"));
}

#[tokio::test]
async fn test_rerun_after_move_finds_next_latest() {
    let harness = TestHarness::new();
    harness.write_spaced(&["old.csv", "new.csv"]).await;

    let config = harness.config(
        r#"action = "move"
overwrite = true"#,
    );

    assert_eq!(run_once(&config, &harness.notifier).await, RunStatus::Success);
    assert!(harness.dest_path("new.csv").exists());

    // The move is not idempotent: the next run promotes the next-latest file.
    let notifier = MockNotifier::new();
    assert_eq!(run_once(&config, &notifier).await, RunStatus::Success);
    assert!(harness.dest_path("old.csv").exists());

    let notifier = MockNotifier::new();
    assert_eq!(run_once(&config, &notifier).await, RunStatus::NoMatch);
}
