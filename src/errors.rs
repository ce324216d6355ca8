//! Error types for the repository core.
//!
//! Every failure carries the path or address it concerns so that the caller
//! can render a message. The core itself never prints.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// No control directory under the given path.
    #[error("not a repository: {path}")]
    NotARepository { path: PathBuf },

    /// `create` found a non-empty control directory.
    #[error("repository already exists at {path}")]
    RepositoryAlreadyExists { path: PathBuf },

    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },

    /// Config file present but a required field is missing or unparsable.
    #[error("invalid configuration in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("unsupported repositoryformatversion: {version}")]
    UnsupportedFormatVersion { version: u32 },

    /// A path component exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("object not found: {oid}")]
    ObjectNotFound { oid: String },

    #[error("malformed commit: {reason}")]
    MalformedCommit { reason: String },

    #[error("invalid object id: {id}")]
    InvalidObjectId { id: String },

    #[error("invalid ref name: {name}")]
    InvalidRefName { name: String },

    /// Symbolic indirection did not terminate within the depth bound.
    #[error("symbolic ref cycle detected at {name}")]
    SymbolicRefCycle { name: String },

    #[error("unknown revision: {revision}")]
    UnknownRevision { revision: String },

    #[error("short object id {revision} is ambiguous; candidates: {}", candidates.join(", "))]
    AmbiguousRevision {
        revision: String,
        candidates: Vec<String>,
    },

    /// Any other filesystem failure.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed_commit(reason: impl Into<String>) -> Self {
        Error::MalformedCommit {
            reason: reason.into(),
        }
    }

    pub fn object_not_found(oid: impl Into<String>) -> Self {
        Error::ObjectNotFound { oid: oid.into() }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Error::NotADirectory { path: path.into() }
    }

    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Attach a path to a raw `io::Result`.
pub(crate) trait IoContext<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::io(path, source))
    }
}
