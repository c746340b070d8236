// tests/integration_sync.rs
mod common;

use common::{FakeVcs, DATA_FILE};
use history_graph_core::codec::Codec;
use history_graph_core::document::HistoryDocument;
use history_graph_core::error::{HistoryError, SyncStep};
use history_graph_core::sync::{SyncSettings, SyncState, Synchronizer};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn sample() -> HistoryDocument {
    let mut doc = HistoryDocument::default();
    doc.add_node("Alan Turing");
    doc.add_edge("alan turing", "claude shannon");
    doc
}

fn cloned(client: FakeVcs, dir: &Path) -> Result<Synchronizer<FakeVcs>> {
    let mut sync = Synchronizer::new(client, Codec::default(), SyncSettings::default());
    sync.initialize("https://example.com/history_graph", &dir.join("repo"))?;
    Ok(sync)
}

#[test]
fn test_initialize_replaces_existing_directory() -> Result<()> {
    let d = tempdir()?;
    let repo = d.path().join("repo");
    fs::create_dir_all(&repo)?;
    fs::write(repo.join("stale.txt"), "old checkout")?;

    let sync = cloned(FakeVcs::default(), d.path())?;

    assert!(!repo.join("stale.txt").exists());
    assert!(repo.exists());
    assert_eq!(sync.state(), SyncState::Cloned);
    assert_eq!(sync.work_dir(), Some(repo.as_path()));
    Ok(())
}

#[test]
fn test_clone_failure_is_clone_error() -> Result<()> {
    let d = tempdir()?;
    let mut sync = Synchronizer::new(
        FakeVcs::failing("clone"),
        Codec::default(),
        SyncSettings::default(),
    );

    let err = sync
        .initialize("https://example.com/missing", &d.path().join("repo"))
        .unwrap_err();

    match err {
        HistoryError::Clone { remote, output } => {
            assert_eq!(remote, "https://example.com/missing");
            assert!(output.contains("clone rejected"));
        }
        other => panic!("expected clone error, got {other:?}"),
    }
    assert_eq!(sync.state(), SyncState::Absent);
    Ok(())
}

#[test]
fn test_failed_reclone_forgets_previous_checkout() -> Result<()> {
    let d = tempdir()?;
    let repo = d.path().join("repo");
    let mut sync = cloned(FakeVcs::cloning_once(), d.path())?;
    assert_eq!(sync.state(), SyncState::Cloned);

    let err = sync
        .initialize("https://example.com/history_graph", &repo)
        .unwrap_err();
    assert!(matches!(err, HistoryError::Clone { .. }));
    assert!(!repo.exists());
    assert_eq!(sync.state(), SyncState::Absent);
    assert_eq!(sync.work_dir(), None);

    let err = sync
        .commit_and_push(&sample(), Path::new(DATA_FILE), "msg")
        .unwrap_err();
    assert!(matches!(err, HistoryError::NotCloned));
    assert_eq!(sync.client().verbs(), ["clone", "clone"]);
    Ok(())
}

#[test]
fn test_push_before_clone_is_rejected() {
    let mut sync = Synchronizer::new(FakeVcs::default(), Codec::default(), SyncSettings::default());
    let err = sync
        .commit_and_push(&sample(), Path::new(DATA_FILE), "msg")
        .unwrap_err();
    assert!(matches!(err, HistoryError::NotCloned));
    assert!(sync.client().calls.is_empty());
}

#[test]
fn test_successful_sync_runs_all_steps_in_order() -> Result<()> {
    let d = tempdir()?;
    let mut sync = cloned(FakeVcs::default(), d.path())?;
    sync.mark_modified();
    assert_eq!(sync.state(), SyncState::Modified);

    sync.commit_and_push(&sample(), Path::new(DATA_FILE), "add turing")?;

    assert_eq!(sync.state(), SyncState::Pushed);
    assert_eq!(
        sync.client().calls[1..],
        [
            format!("add {DATA_FILE}"),
            "commit add turing".to_string(),
            "push origin master".to_string(),
        ]
    );

    let written = fs::read_to_string(d.path().join("repo").join(DATA_FILE))?;
    assert!(written.starts_with("data = {"));
    assert_eq!(Codec::default().decode(&written)?, sample());
    Ok(())
}

#[test]
fn test_commit_failure_skips_push() -> Result<()> {
    let d = tempdir()?;
    let mut sync = cloned(FakeVcs::failing("commit"), d.path())?;

    let err = sync
        .commit_and_push(&sample(), Path::new(DATA_FILE), "msg")
        .unwrap_err();

    assert_eq!(err.sync_step(), Some(SyncStep::Commit));
    assert!(err.to_string().contains("commit rejected"));
    assert_eq!(sync.client().verbs(), ["clone", "add", "commit"]);
    assert_eq!(sync.state(), SyncState::SyncFailed);
    Ok(())
}

#[test]
fn test_stage_failure_stops_immediately() -> Result<()> {
    let d = tempdir()?;
    let mut sync = cloned(FakeVcs::failing("add"), d.path())?;

    let err = sync
        .commit_and_push(&sample(), Path::new(DATA_FILE), "msg")
        .unwrap_err();

    assert_eq!(err.sync_step(), Some(SyncStep::Stage));
    assert_eq!(sync.client().verbs(), ["clone", "add"]);
    Ok(())
}

#[test]
fn test_push_failure_keeps_earlier_steps() -> Result<()> {
    let d = tempdir()?;
    let mut sync = cloned(FakeVcs::failing("push"), d.path())?;

    let err = sync
        .commit_and_push(&sample(), Path::new(DATA_FILE), "msg")
        .unwrap_err();

    assert_eq!(err.sync_step(), Some(SyncStep::Push));
    assert_eq!(sync.client().verbs(), ["clone", "add", "commit", "push"]);
    assert!(d.path().join("repo").join(DATA_FILE).exists());
    assert_eq!(sync.state(), SyncState::SyncFailed);
    Ok(())
}

#[test]
fn test_retry_after_failure_attempts_each_step_once() -> Result<()> {
    let d = tempdir()?;
    let mut sync = cloned(FakeVcs::default(), d.path())?;
    sync.commit_and_push(&sample(), Path::new(DATA_FILE), "first")?;
    sync.commit_and_push(&sample(), Path::new(DATA_FILE), "second")?;

    let pushes = sync.client().verbs().iter().filter(|v| **v == "push").count();
    assert_eq!(pushes, 2);
    Ok(())
}

#[test]
fn test_push_targets_configured_branch() -> Result<()> {
    let d = tempdir()?;
    let settings = SyncSettings {
        remote_name: "upstream".into(),
        branch: "main".into(),
    };
    let mut sync = Synchronizer::new(FakeVcs::default(), Codec::default(), settings);
    sync.initialize("https://example.com/history_graph", &d.path().join("repo"))?;
    sync.commit_and_push(&sample(), Path::new(DATA_FILE), "msg")?;

    assert_eq!(sync.client().calls.last().map(String::as_str), Some("push upstream main"));
    Ok(())
}
