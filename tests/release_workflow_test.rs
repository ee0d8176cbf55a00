use std::fs;

use simpver::cli::{run_release, ReleaseOptions};
use simpver::config::Config;
use simpver::github::{MockRepository, PullRequestInfo};
use simpver::tag::TagSelection;
use simpver::version::VersionBump;
use tempfile::TempDir;

const HEAD_SHA: &str = "9fceb02d0ae598e95dc970b74767f19372d61af8";

fn pull(number: u64, merged: bool, labels: &[&str]) -> PullRequestInfo {
    PullRequestInfo {
        number,
        merged,
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

fn repo_at(tags: &[&str]) -> MockRepository {
    let mut repo = MockRepository::new();
    repo.set_head("main", HEAD_SHA);
    for tag in tags {
        repo.add_tag(*tag);
    }
    repo
}

fn options_in(dir: &TempDir) -> ReleaseOptions {
    ReleaseOptions {
        artifact: Some(dir.path().join(".version")),
        dry_run: false,
    }
}

#[test]
fn test_major_label_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_at(&["v2.3", "v2.2"]);
    repo.add_pull(HEAD_SHA, pull(42, true, &["major", "reviewed"]));

    let outcome = run_release(&repo, &Config::default(), &options_in(&dir)).unwrap();

    assert_eq!(outcome.current_tag, "v2.3");
    assert_eq!(outcome.new_tag, "v3.3");
    assert_eq!(outcome.bump, VersionBump::Major);
    assert_eq!(outcome.pull_number, Some(42));
    assert_eq!(outcome.reference.as_deref(), Some("refs/tags/v3.3"));
    assert_eq!(
        repo.created_refs(),
        vec![("refs/tags/v3.3".to_string(), HEAD_SHA.to_string())]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(".version")).unwrap(),
        "v3.3"
    );
}

#[test]
fn test_unlabelled_merge_bumps_minor() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_at(&["v1.2-rc1", "v1.9", "v1.8"]);
    repo.add_pull(HEAD_SHA, pull(7, true, &["bug", "minor"]));

    let outcome = run_release(&repo, &Config::default(), &options_in(&dir)).unwrap();

    assert_eq!(outcome.current_tag, "v1.9");
    assert_eq!(outcome.new_tag, "v1.10");
    assert_eq!(outcome.bump, VersionBump::Minor);
}

#[test]
fn test_only_first_merged_pull_counts() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_at(&["v4.0"]);
    repo.add_pull(HEAD_SHA, pull(10, false, &["major"]));
    repo.add_pull(HEAD_SHA, pull(11, true, &["docs"]));
    repo.add_pull(HEAD_SHA, pull(12, true, &["major"]));

    let outcome = run_release(&repo, &Config::default(), &options_in(&dir)).unwrap();

    assert_eq!(outcome.pull_number, Some(11));
    assert_eq!(outcome.new_tag, "v4.1");
}

#[test]
fn test_no_merged_pull_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_at(&["v3.5"]);
    repo.add_pull(HEAD_SHA, pull(5, false, &["major"]));

    let outcome = run_release(&repo, &Config::default(), &options_in(&dir)).unwrap();

    assert_eq!(outcome.pull_number, None);
    assert_eq!(outcome.new_tag, "v3.6");
}

#[test]
fn test_second_run_bumps_again() {
    let dir = TempDir::new().unwrap();
    let repo = repo_at(&["v1.0"]);

    let first = run_release(&repo, &Config::default(), &options_in(&dir)).unwrap();
    let second = run_release(&repo, &Config::default(), &options_in(&dir)).unwrap();

    assert_eq!(first.new_tag, "v1.1");
    assert_eq!(second.current_tag, "v1.1");
    assert_eq!(second.new_tag, "v1.2");
    assert_eq!(
        fs::read_to_string(dir.path().join(".version")).unwrap(),
        "v1.2"
    );
}

#[test]
fn test_remote_failure_leaves_artifact_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".version");
    fs::write(&path, "v0.9").unwrap();

    let mut repo = repo_at(&["v1.0"]);
    repo.fail_tag_creation();

    let err = run_release(&repo, &Config::default(), &options_in(&dir)).unwrap_err();
    assert!(matches!(err, simpver::SimpverError::Remote(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "v0.9");
}

#[test]
fn test_artifact_failure_keeps_created_tag() {
    let dir = TempDir::new().unwrap();
    let repo = repo_at(&["v1.0"]);
    let options = ReleaseOptions {
        artifact: Some(dir.path().join("missing").join(".version")),
        dry_run: false,
    };

    let err = run_release(&repo, &Config::default(), &options).unwrap_err();
    assert!(matches!(err, simpver::SimpverError::Io(_)));
    assert_eq!(repo.created_refs().len(), 1);
}

#[test]
fn test_config_overrides() {
    let dir = TempDir::new().unwrap();
    let mut repo = repo_at(&["v1.9", "v1.10", "v1.2"]);
    repo.add_pull(HEAD_SHA, pull(3, true, &["breaking"]));

    let config = Config {
        major_label: "breaking".to_string(),
        selection: TagSelection::Highest,
        artifact: dir.path().join("VERSION"),
        ..Config::default()
    };
    let options = ReleaseOptions::default();

    let outcome = run_release(&repo, &config, &options).unwrap();

    assert_eq!(outcome.current_tag, "v1.10");
    assert_eq!(outcome.new_tag, "v2.10");
    assert_eq!(
        fs::read_to_string(dir.path().join("VERSION")).unwrap(),
        "v2.10"
    );
}
