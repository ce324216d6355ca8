use crate::common::command::{
    get_head_commit_sha, init_repository_dir, kit_stdout, log_commit_shas, repository_dir,
    run_kit_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_walks_from_head_to_root(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let head = get_head_commit_sha(dir)?;
    let second = kit_stdout(dir, &["rev-parse", "HEAD^"])?.trim().to_string();
    let first = kit_stdout(dir, &["rev-parse", "HEAD~2"])?.trim().to_string();

    let stdout = kit_stdout(dir, &["log"])?;

    assert_eq!(log_commit_shas(&stdout), vec![head.clone(), second.clone(), first.clone()]);
    assert_eq!(
        stdout,
        format!(
            "commit {head}\n\n    Commit 3\n\ncommit {second}\n\n    Commit 2\n\ncommit {first}\n\n    Commit 1\n"
        )
    );

    Ok(())
}

#[rstest]
fn log_from_revision_starts_there(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let first = kit_stdout(dir, &["rev-parse", "HEAD~2"])?.trim().to_string();
    let second = kit_stdout(dir, &["rev-parse", "@^"])?.trim().to_string();

    let stdout = kit_stdout(dir, &["log", "HEAD^"])?;

    assert_eq!(log_commit_shas(&stdout), vec![second, first]);

    Ok(())
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(10)]
fn log_limits_number_of_commits(
    #[from(init_repository_dir)] repository_dir: TempDir,
    #[case] max_count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    let stdout = kit_stdout(dir, &["log", "-n", &max_count.to_string()])?;

    assert_eq!(log_commit_shas(&stdout).len(), max_count.min(3));

    Ok(())
}

#[rstest]
fn log_without_commits_prints_nothing(repository_dir: TempDir) {
    run_kit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_kit_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout("");
}

#[rstest]
fn multi_line_messages_are_indented(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_kit_command(dir, &["commit", "-m", "Subject\n\nBody line", "1.txt"])
        .assert()
        .success();

    let stdout = kit_stdout(dir, &["log", "-n", "1"])?;

    assert!(stdout.ends_with("\n\n    Subject\n    \n    Body line\n"));

    Ok(())
}
