// tests/workflow_test.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dir_release::cli::{run_release_workflow, ReleaseWorkflowArgs};
use dir_release::domain::ReleaseId;
use dir_release::git::{Git2Repository, MockRepository};
use dir_release::host::{HostCall, MockReleaseHost};
use dir_release::warning::ReleaseWarning;
use dir_release::ReleaseError;
use tempfile::TempDir;

const HASH: &str = "0123456789abcdef0123456789abcdef01234567";

fn args(reference: &str, root: &Path) -> ReleaseWorkflowArgs {
    ReleaseWorkflowArgs {
        root: Some(root.to_path_buf()),
        settle_delay: Duration::ZERO,
        ..ReleaseWorkflowArgs::new(reference)
    }
}

fn tools_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("tools");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.bin"), b"a").unwrap();
    fs::write(dir.join("b.bin"), b"b").unwrap();
    fs::create_dir(dir.join("extra")).unwrap();
    tmp
}

fn ids(names: &[&str]) -> Vec<ReleaseId> {
    names.iter().map(|n| ReleaseId::from(*n)).collect()
}

#[test]
fn test_stable_tag_publishes_aliases_and_exact_version() {
    let tmp = tools_dir();
    let repo = MockRepository::new().with_tag("tools/v2.0.1", HASH);
    let host = MockReleaseHost::new();
    host.add_release("tools/v2");

    let result = run_release_workflow(&args("tools/v2.0.1", tmp.path()), &repo, &host).unwrap();

    assert_eq!(result.target, HASH);
    assert_eq!(
        result.releases,
        ids(&["tools/v2", "tools/v2.0", "tools/v2.0.1"])
    );

    let files: Vec<PathBuf> = vec![
        tmp.path().join("tools").join("a.bin"),
        tmp.path().join("tools").join("b.bin"),
    ];
    assert_eq!(result.attachments, files);

    let updated: Vec<bool> = result.outcomes.iter().map(|o| o.updated).collect();
    assert_eq!(updated, vec![true, true, false]);

    // tools/v2 existed, tools/v2.0 did not yet.
    assert_eq!(result.outcomes[0].warning, None);
    assert!(matches!(
        result.outcomes[1].warning,
        Some(ReleaseWarning::DeleteFailed { .. })
    ));

    let create = |name: &str| HostCall::Create {
        release: ReleaseId::from(name),
        target: HASH.to_string(),
        files: files.clone(),
    };
    let delete = |name: &str| HostCall::Delete {
        release: ReleaseId::from(name),
    };
    assert_eq!(
        host.calls(),
        vec![
            delete("tools/v2"),
            create("tools/v2"),
            delete("tools/v2.0"),
            create("tools/v2.0"),
            create("tools/v2.0.1"),
        ]
    );
    assert_eq!(
        host.releases(),
        ids(&["tools/v2", "tools/v2.0", "tools/v2.0.1"])
    );
}

#[test]
fn test_prerelease_tag_is_created_fresh_only() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("lib")).unwrap();
    fs::write(tmp.path().join("lib").join("lib.tar.gz"), b"x").unwrap();
    let repo = MockRepository::new().with_tag("lib/v0.9.0-beta.1", HASH);
    let host = MockReleaseHost::new();

    let mut workflow_args = args("lib/v0.9.0-beta.1", tmp.path());
    // Would block the test for an hour if a wait happened.
    workflow_args.settle_delay = Duration::from_secs(3600);

    let result = run_release_workflow(&workflow_args, &repo, &host).unwrap();

    assert_eq!(result.releases, ids(&["lib/v0.9.0-beta.1"]));
    assert_eq!(result.outcomes.len(), 1);
    assert!(!result.outcomes[0].updated);
    assert_eq!(result.outcomes[0].waited, Duration::ZERO);
    assert!(host
        .calls()
        .iter()
        .all(|call| matches!(call, HostCall::Create { .. })));
}

#[test]
fn test_rerun_rejects_existing_exact_version() {
    let tmp = tools_dir();
    let repo = MockRepository::new().with_tag("tools/v2.0.1", HASH);
    let host = MockReleaseHost::new();
    let workflow_args = args("tools/v2.0.1", tmp.path());

    let first = run_release_workflow(&workflow_args, &repo, &host).unwrap();
    let err = run_release_workflow(&workflow_args, &repo, &host).unwrap_err();

    assert!(matches!(err, ReleaseError::Publish(_)));
    assert!(err.to_string().contains("tools/v2.0.1"));
    // The aliases were recreated before the exact version was refused.
    assert_eq!(first.releases.len(), 3);
    assert_eq!(host.releases().len(), 3);
}

#[test]
fn test_dry_run_does_not_touch_host() {
    let tmp = tools_dir();
    let repo = MockRepository::new().with_tag("tools/v2.0.1", HASH);
    let host = MockReleaseHost::new();
    let mut workflow_args = args("tools/v2.0.1", tmp.path());
    workflow_args.dry_run = true;

    let result = run_release_workflow(&workflow_args, &repo, &host).unwrap();

    assert_eq!(result.releases.len(), 3);
    assert!(result.outcomes.is_empty());
    assert!(host.calls().is_empty());
}

#[test]
fn test_invalid_reference_fails_before_publishing() {
    let tmp = tools_dir();
    let repo = MockRepository::new();
    let host = MockReleaseHost::new();

    let err = run_release_workflow(&args("bad", tmp.path()), &repo, &host).unwrap_err();
    assert!(matches!(err, ReleaseError::Format(_)));

    let err = run_release_workflow(&args("tools/2.0.1", tmp.path()), &repo, &host).unwrap_err();
    assert!(matches!(err, ReleaseError::Version(_)));

    assert!(host.calls().is_empty());
}

#[test]
fn test_missing_directory_fails_before_publishing() {
    let tmp = TempDir::new().unwrap();
    let repo = MockRepository::new().with_tag("tools/v1.0.0", HASH);
    let host = MockReleaseHost::new();

    let err = run_release_workflow(&args("tools/v1.0.0", tmp.path()), &repo, &host).unwrap_err();
    assert!(matches!(err, ReleaseError::Directory(_)));
    assert!(host.calls().is_empty());
}

#[test]
fn test_unknown_tag_fails_before_publishing() {
    let tmp = tools_dir();
    let repo = MockRepository::new();
    let host = MockReleaseHost::new();

    let err = run_release_workflow(&args("tools/v2.0.1", tmp.path()), &repo, &host).unwrap_err();
    assert!(matches!(err, ReleaseError::Vcs(_)));
    assert!(host.calls().is_empty());
}

#[test]
fn test_failed_alias_creation_leaves_earlier_releases() {
    let tmp = tools_dir();
    let repo = MockRepository::new().with_tag("tools/v2.0.1", HASH);
    let host = MockReleaseHost::new();
    host.fail_create("tools/v2.0");

    let err = run_release_workflow(&args("tools/v2.0.1", tmp.path()), &repo, &host).unwrap_err();

    assert!(matches!(err, ReleaseError::Publish(_)));
    assert_eq!(host.releases(), ids(&["tools/v2"]));
}

#[test]
fn test_workflow_with_real_repository() {
    let tmp = tools_dir();
    let git = git2::Repository::init(tmp.path()).unwrap();
    let oid = {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = git.index().unwrap().write_tree().unwrap();
        let tree = git.find_tree(tree_id).unwrap();
        let oid = git
            .commit(Some("HEAD"), &sig, &sig, "release tools", &tree, &[])
            .unwrap();
        let commit = git.find_object(oid, None).unwrap();
        git.tag("tools/v1.4.0", &commit, &sig, "tools v1.4.0", false)
            .unwrap();
        oid
    };

    let repo = Git2Repository::from_git2(git);
    let host = MockReleaseHost::new();

    let result = run_release_workflow(&args("tools/v1.4.0", tmp.path()), &repo, &host).unwrap();

    assert_eq!(result.target, oid.to_string());
    assert_eq!(
        host.releases(),
        ids(&["tools/v1", "tools/v1.4", "tools/v1.4.0"])
    );
}
