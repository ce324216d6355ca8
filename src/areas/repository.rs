//! Repository layout
//!
//! A repository is a worktree plus its control directory (`.git`):
//!
//! ```text
//! .git/description
//! .git/HEAD
//! .git/config
//! .git/branches/
//! .git/objects/<aa>/<rest>
//! .git/refs/heads/
//! .git/refs/tags/
//! ```
//!
//! A `Repository` is either validated (control directory, config and format
//! version all checked) or forced, which skips those checks and is only used
//! while the repository is being created.

use crate::areas::config::{Config, SUPPORTED_FORMAT_VERSION};
use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::RefName;
use crate::errors::{Error, IoContext, Result};
use std::path::{Path, PathBuf};

pub const GIT_DIR_NAME: &str = ".git";
pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

#[derive(Debug)]
pub struct Repository {
    worktree: Box<Path>,
    git_dir: Box<Path>,
    config: Config,
    database: Database,
    refs: Refs,
    workspace: Workspace,
}

impl Repository {
    /// Open the repository whose worktree is `path`.
    ///
    /// Unless `force` is set this fails with `NotARepository`,
    /// `MissingConfig` or `UnsupportedFormatVersion`. A forced repository
    /// never reads the config file and carries the default config.
    pub fn locate(path: impl AsRef<Path>, force: bool) -> Result<Self> {
        let path = path.as_ref();
        let worktree = std::path::absolute(path).at_path(path)?;
        let git_dir = worktree.join(GIT_DIR_NAME);

        if !force && !git_dir.is_dir() {
            return Err(Error::NotARepository { path: worktree });
        }

        let config = if force {
            Config::default()
        } else {
            Config::load(&git_dir.join("config"))?
        };

        if !force && config.repository_format_version != SUPPORTED_FORMAT_VERSION {
            return Err(Error::UnsupportedFormatVersion {
                version: config.repository_format_version,
            });
        }

        tracing::debug!(worktree = %worktree.display(), force, "opened repository");

        Ok(Repository {
            database: Database::new(git_dir.join("objects").into_boxed_path()),
            refs: Refs::new(git_dir.clone().into_boxed_path()),
            workspace: Workspace::new(worktree.clone().into_boxed_path()),
            worktree: worktree.into_boxed_path(),
            git_dir: git_dir.into_boxed_path(),
            config,
        })
    }

    /// Open the closest repository containing `path`, searching upwards
    pub fn find(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let start = std::path::absolute(path).at_path(path)?;

        let worktree = start
            .ancestors()
            .find(|candidate| candidate.join(GIT_DIR_NAME).is_dir())
            .ok_or_else(|| Error::NotARepository {
                path: start.clone(),
            })?;

        Self::locate(worktree, false)
    }

    /// Build a brand-new repository at `path`.
    ///
    /// The worktree may already exist with content, but its control
    /// directory must be absent or empty. Nothing is rolled back if a step
    /// fails part way.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let repository = Self::locate(path, true)?;

        if repository.worktree.exists() {
            if !repository.worktree.is_dir() {
                return Err(Error::not_a_directory(repository.worktree.to_path_buf()));
            }

            if repository.git_dir.exists() {
                if !repository.git_dir.is_dir() {
                    return Err(Error::not_a_directory(repository.git_dir.to_path_buf()));
                }

                let mut entries =
                    std::fs::read_dir(&repository.git_dir).at_path(&*repository.git_dir)?;
                if entries.next().is_some() {
                    return Err(Error::RepositoryAlreadyExists {
                        path: repository.git_dir.to_path_buf(),
                    });
                }
            }
        } else {
            std::fs::create_dir_all(&repository.worktree).at_path(&*repository.worktree)?;
        }

        repository.resolve_dir(&["branches"], true)?;
        repository.resolve_dir(&["objects"], true)?;
        repository.resolve_dir(&["refs", "tags"], true)?;
        repository.resolve_dir(&["refs", "heads"], true)?;

        let description = repository.resolve_file(&["description"], true)?;
        std::fs::write(&description, DEFAULT_DESCRIPTION).at_path(&description)?;

        let default_branch = RefName::try_parse(DEFAULT_BRANCH)?;
        repository.refs.set_head(&default_branch)?;

        let config_path = repository.resolve_file(&["config"], true)?;
        Config::default().save(&config_path)?;

        tracing::info!(git_dir = %repository.git_dir.display(), "created repository");

        Self::locate(&repository.worktree, false)
    }

    /// Join `segments` under the control directory; no I/O
    pub fn resolve_path(&self, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(self.git_dir.to_path_buf(), |path, segment| path.join(segment))
    }

    /// Like `resolve_path`, optionally creating every directory except the
    /// last segment
    pub fn resolve_file(&self, segments: &[&str], create_parents: bool) -> Result<PathBuf> {
        if create_parents && let Some((_, parents)) = segments.split_last() {
            self.resolve_dir(parents, true)?;
        }

        Ok(self.resolve_path(segments))
    }

    /// The directory at `segments`, created when absent and `create` is set.
    ///
    /// Returns `None` when the directory is absent and `create` is unset.
    pub fn resolve_dir(&self, segments: &[&str], create: bool) -> Result<Option<PathBuf>> {
        let path = self.resolve_path(segments);

        if path.exists() {
            return if path.is_dir() {
                Ok(Some(path))
            } else {
                Err(Error::not_a_directory(path))
            };
        }

        if !create {
            return Ok(None);
        }

        match std::fs::create_dir_all(&path) {
            Ok(()) => Ok(Some(path)),
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::NotADirectory | std::io::ErrorKind::AlreadyExists
                ) =>
            {
                Err(Error::not_a_directory(path))
            }
            Err(err) => Err(Error::io(path, err)),
        }
    }

    /// Lazily walk the commit chain starting at `start`
    pub fn history(&self, start: ObjectId) -> RevList<'_> {
        RevList::new(&self.database, Some(start))
    }

    pub fn worktree(&self) -> &Path {
        &self.worktree
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
