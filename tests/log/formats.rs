use crate::common::command::{init_repository_dir, kit_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn oneline_prints_short_id_and_subject(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let shas = ["HEAD", "HEAD^", "HEAD~2"]
        .into_iter()
        .map(|revision| {
            kit_stdout(dir, &["rev-parse", revision]).map(|sha| sha.trim().to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let stdout = kit_stdout(dir, &["log", "--oneline"])?;

    assert_eq!(
        stdout,
        format!(
            "{} Commit 3\n{} Commit 2\n{} Commit 1\n",
            &shas[0][..7],
            &shas[1][..7],
            &shas[2][..7]
        )
    );

    Ok(())
}

#[rstest]
fn oneline_respects_max_count(
    #[from(init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = kit_stdout(repository_dir.path(), &["log", "--oneline", "--max-count", "2"])?;

    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.lines().all(|line| line.contains(" Commit ")));

    Ok(())
}
