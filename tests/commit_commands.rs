use crate::common::command::{
    get_head_commit_sha, init_repository_dir, kit_commit, kit_stdout, repository_dir,
    run_kit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::{fixture, rstest};

mod common;

#[fixture]
fn empty_repository_dir(repository_dir: TempDir) -> TempDir {
    run_kit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    repository_dir
}

#[rstest]
fn first_commit_is_a_root_commit(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello\n".to_string()));

    let stdout = kit_stdout(dir, &["commit", "-m", "first", "hello.txt"])?;
    let head = get_head_commit_sha(dir)?;

    assert_eq!(stdout, format!("[master (root-commit) {}] first\n", &head[..7]));
    assert_eq!(
        kit_stdout(dir, &["cat-file", &head])?,
        "tree f572d396fae9206628714fb2ce00f72e94f2258f\n\nfirst"
    );
    assert_eq!(
        std::fs::read_to_string(dir.join(".git/refs/heads/master"))?,
        format!("{head}\n")
    );

    Ok(())
}

#[rstest]
fn next_commit_records_previous_head_as_parent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let previous_head = get_head_commit_sha(dir)?;
    write_file(FileSpec::new(dir.join("4.txt"), "four".to_string()));

    let stdout = kit_stdout(dir, &["commit", "-m", "Commit 4\n\nWith a body", "4.txt"])?;
    let head = get_head_commit_sha(dir)?;
    let raw = kit_stdout(dir, &["cat-file", &head])?;

    assert_eq!(stdout, format!("[master {}] Commit 4\n", &head[..7]));
    assert!(raw.starts_with("tree "));
    assert!(raw.contains(&format!("\nparent {previous_head}\n\nCommit 4\n\nWith a body")));
    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(kit_stdout(dir, &["rev-parse", "HEAD^"])?.trim(), previous_head);

    Ok(())
}

#[rstest]
fn commit_can_reuse_a_stored_object_as_tree(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("snapshot"), "snapshot".to_string()));
    let tree = kit_stdout(dir, &["hash-object", "-w", "snapshot"])?
        .trim()
        .to_string();

    run_kit_command(dir, &["commit", "-m", "from tree", "--tree", &tree[..10]])
        .assert()
        .success();

    let head = get_head_commit_sha(dir)?;
    assert_eq!(
        kit_stdout(dir, &["cat-file", &head])?,
        format!("tree {tree}\n\nfrom tree")
    );

    Ok(())
}

#[rstest]
fn commit_on_detached_head_moves_head_itself(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let master = get_head_commit_sha(dir)?;
    let first = kit_stdout(dir, &["rev-parse", "HEAD~2"])?.trim().to_string();
    std::fs::write(dir.join(".git/HEAD"), format!("{first}\n"))?;

    let stdout = kit_commit(dir, "3.txt", "Detached")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let head = get_head_commit_sha(dir)?;

    assert_eq!(
        String::from_utf8(stdout)?,
        format!("[detached HEAD {}] Detached\n", &head[..7])
    );
    assert_eq!(
        std::fs::read_to_string(dir.join(".git/HEAD"))?,
        format!("{head}\n")
    );
    assert_eq!(kit_stdout(dir, &["rev-parse", "master"])?.trim(), master);
    assert_eq!(kit_stdout(dir, &["rev-parse", "HEAD^"])?.trim(), first);

    Ok(())
}

#[rstest]
fn commit_requires_a_snapshot(empty_repository_dir: TempDir) {
    run_kit_command(empty_repository_dir.path(), &["commit", "-m", "nothing"])
        .assert()
        .failure();
}

#[rstest]
fn commit_with_unknown_tree_fails(empty_repository_dir: TempDir) {
    run_kit_command(
        empty_repository_dir.path(),
        &["commit", "-m", "broken", "--tree", "deadbeef"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown revision: deadbeef"));

    assert!(
        !empty_repository_dir
            .path()
            .join(".git/refs/heads/master")
            .exists()
    );
}
