use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with three commits on master whose snapshots are
/// `1.txt`, `2.txt` and `3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_kit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for (i, content) in ["one", "two", "three"].into_iter().enumerate() {
        let file_name = format!("{}.txt", i + 1);
        write_file(FileSpec::new(
            repository_dir.path().join(&file_name),
            content.to_string(),
        ));

        kit_commit(repository_dir.path(), &file_name, &format!("Commit {}", i + 1))
            .assert()
            .success();
    }

    repository_dir
}

pub fn run_kit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("kit").expect("Failed to find kit binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn kit_commit(dir: &Path, file: &str, message: &str) -> Command {
    run_kit_command(dir, &["commit", "-m", message, file])
}

pub fn kit_stdout(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_kit_command(dir, args).assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}

pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    Ok(kit_stdout(dir, &["rev-parse", "HEAD"])?.trim().to_string())
}

/// Commit IDs printed by `log` in its default format, newest first
pub fn log_commit_shas(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(|sha| sha.split_whitespace().next().unwrap_or_default().to_string())
        .collect()
}
