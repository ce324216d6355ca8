use crate::common::command::{
    get_head_commit_sha, init_repository_dir, kit_stdout, run_kit_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn decorate_shows_head_branch_and_tags(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_kit_command(dir, &["tag", "v1", "HEAD~2"]).assert().success();
    let head = get_head_commit_sha(dir)?;

    let stdout = kit_stdout(dir, &["log", "--oneline", "--decorate"])?;
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], format!("{} (HEAD -> master) Commit 3", &head[..7]));
    assert!(lines[1].ends_with(" Commit 2"));
    assert!(!lines[1].contains('('));
    assert!(lines[2].ends_with(" (tag: v1) Commit 1"));

    Ok(())
}

#[rstest]
fn decorate_shows_detached_head(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let second = kit_stdout(dir, &["rev-parse", "HEAD^"])?.trim().to_string();
    std::fs::write(dir.join(".git/HEAD"), format!("{second}\n"))?;

    let stdout = kit_stdout(dir, &["log", "master", "--decorate"])?;

    assert!(stdout.contains("(master)"));
    assert!(stdout.contains(&format!("commit {second} (HEAD)")));

    Ok(())
}
