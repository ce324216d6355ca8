use crate::common::command::{get_head_commit_sha, init_repository_dir, run_kit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

fn object_path(dir: &std::path::Path, sha: &str) -> std::path::PathBuf {
    dir.join(".git/objects").join(&sha[..2]).join(&sha[2..])
}

#[rstest]
fn missing_parent_fails_after_printing_newer_commits(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let head = get_head_commit_sha(dir)?;
    let output = run_kit_command(dir, &["rev-parse", "HEAD^"]).output()?;
    let parent = String::from_utf8(output.stdout)?.trim().to_string();
    std::fs::remove_file(object_path(dir, &parent))?;

    run_kit_command(dir, &["log"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(format!("commit {head}")))
        .stdout(predicate::str::contains("Commit 3"))
        .stdout(predicate::str::contains("Commit 2").not())
        .stderr(predicate::str::contains(format!("object not found: {parent}")));

    Ok(())
}

#[rstest]
fn malformed_commit_is_reported(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let head = get_head_commit_sha(dir)?;
    let path = object_path(dir, &head);
    std::fs::write(&path, "this is not a commit")?;

    run_kit_command(dir, &["log"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("malformed commit"));

    Ok(())
}
