//! Worktree file access
//!
//! The engine never walks the worktree; it only reads the files a command
//! names and hands their bytes to the object store.

use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    /// Read a file given relative to the worktree or as an absolute path
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        if file_path.is_dir() {
            anyhow::bail!("{} is a directory", file_path.display());
        }

        let content = std::fs::read(&file_path)
            .with_context(|| format!("unable to read file {}", file_path.display()))?;

        Ok(Bytes::from(content))
    }

    /// Path of `file_path` relative to the worktree root
    pub fn relative_path(&self, file_path: &Path) -> anyhow::Result<PathBuf> {
        let absolute = std::path::absolute(self.path.join(file_path))
            .with_context(|| format!("unable to resolve {}", file_path.display()))?;

        absolute
            .strip_prefix(&self.path)
            .map(Path::to_path_buf)
            .with_context(|| format!("{} is outside repository", file_path.display()))
    }
}
