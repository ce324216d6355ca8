//! References (HEAD, branches, tags)
//!
//! A ref is a text file under the control directory containing either:
//! - A 40-character object ID (direct reference)
//! - `ref: <path>` for a symbolic reference to another ref
//!
//! Following symbolic references always terminates: either at a direct
//! object ID, at an absent or empty ref file ("unborn", no commits yet), or
//! with `SymbolicRefCycle` once the indirection depth bound is exceeded.
//!
//! Ref updates take an exclusive advisory lock on the ref file for the
//! duration of the write. Nothing else coordinates concurrent writers.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::{RefName, SymRefName};
use crate::artifacts::refs::{HEADS_PREFIX, TAGS_PREFIX};
use crate::errors::{Error, IoContext, Result};
use derive_new::new;
use file_guard::Lock;
use std::collections::HashMap;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (typically `.git`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Maximum number of symbolic hops before giving up
const MAX_SYMREF_DEPTH: usize = 10;

pub const HEAD_REF_NAME: &str = "HEAD";

/// Contents of a ref file
#[derive(Debug, Clone, PartialEq, Eq)]
enum SymRefOrOid {
    SymRef { sym_ref_name: SymRefName },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).at_path(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_regex = regex::Regex::new(SYMREF_REGEX).map_err(|_| Error::InvalidRefName {
            name: path.display().to_string(),
        })?;

        if let Some(symref_match) = symref_regex.captures(content) {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].trim().to_string()),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(content)?)))
        }
    }
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.path.join(HEADS_PREFIX)
    }

    pub fn tags_path(&self) -> PathBuf {
        self.path.join(TAGS_PREFIX)
    }

    fn ref_path(&self, sym_ref_name: &SymRefName) -> PathBuf {
        self.path.join(sym_ref_name.as_ref_path())
    }

    pub fn exists(&self, sym_ref_name: &SymRefName) -> bool {
        self.ref_path(sym_ref_name).is_file()
    }

    /// Resolve HEAD to a commit ID; `None` while the current branch is unborn
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        self.resolve(&SymRefName::head())
    }

    /// Follow symbolic references from `sym_ref_name` to an object ID
    pub fn resolve(&self, sym_ref_name: &SymRefName) -> Result<Option<ObjectId>> {
        let target = self.final_ref(sym_ref_name)?;

        match SymRefOrOid::read_symref_or_oid(&self.ref_path(&target))? {
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            Some(SymRefOrOid::SymRef { .. }) | None => Ok(None),
        }
    }

    /// The last ref in the symbolic chain starting at HEAD, e.g.
    /// `refs/heads/master`; HEAD itself when detached
    pub fn current_ref(&self) -> Result<SymRefName> {
        self.final_ref(&SymRefName::head())
    }

    fn final_ref(&self, source: &SymRefName) -> Result<SymRefName> {
        let mut current = source.clone();

        for _ in 0..=MAX_SYMREF_DEPTH {
            match SymRefOrOid::read_symref_or_oid(&self.ref_path(&current))? {
                Some(SymRefOrOid::SymRef { sym_ref_name }) => current = sym_ref_name,
                Some(SymRefOrOid::Oid(_)) | None => return Ok(current),
            }
        }

        Err(Error::SymbolicRefCycle {
            name: source.to_string(),
        })
    }

    /// Point the ref that HEAD designates at `oid`
    ///
    /// With HEAD symbolic the branch file is updated (and created when the
    /// branch is unborn); with HEAD detached HEAD itself is rewritten.
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        let target = self.current_ref()?;
        tracing::debug!(target_ref = %target, %oid, "updating ref");

        self.write_ref_file(&self.ref_path(&target), &format!("{oid}\n"))
    }

    /// Make HEAD a symbolic ref to `refs/heads/<branch>`
    pub fn set_head(&self, branch: &RefName) -> Result<()> {
        self.write_ref_file(
            &self.head_path(),
            &format!("ref: {}\n", SymRefName::branch(branch)),
        )
    }

    pub fn create_ref(&self, sym_ref_name: &SymRefName, oid: &ObjectId) -> Result<()> {
        self.write_ref_file(&self.ref_path(sym_ref_name), &format!("{oid}\n"))
    }

    /// Look up a short or full ref name the way `rev-parse` does: as given,
    /// then under `refs/`, `refs/tags/` and `refs/heads/`
    ///
    /// Only `HEAD` and names under `refs/` match as given, so control files
    /// such as `config` never shadow a tag or branch.
    pub fn find_ref(&self, name: &str) -> Option<SymRefName> {
        let as_given = (name == HEAD_REF_NAME || name.starts_with("refs/"))
            .then(|| name.to_string());

        as_given
            .into_iter()
            .chain([
                format!("refs/{name}"),
                format!("{TAGS_PREFIX}{name}"),
                format!("{HEADS_PREFIX}{name}"),
            ])
            .map(SymRefName::new)
            .find(|candidate| self.exists(candidate))
    }

    /// All ref files under `refs/`, sorted by name
    pub fn list_refs(&self) -> Result<Vec<SymRefName>> {
        self.list_refs_under(&self.refs_path())
    }

    pub fn list_tags(&self) -> Result<Vec<SymRefName>> {
        self.list_refs_under(&self.tags_path())
    }

    /// Map each commit to the refs pointing at it, HEAD included
    pub fn reverse_refs(&self) -> Result<HashMap<ObjectId, Vec<SymRefName>>> {
        let mut reverse_refs: HashMap<ObjectId, Vec<SymRefName>> = HashMap::new();

        for sym_ref_name in std::iter::once(SymRefName::head()).chain(self.list_refs()?) {
            if let Some(oid) = self.resolve(&sym_ref_name)? {
                reverse_refs.entry(oid).or_default().push(sym_ref_name);
            }
        }

        Ok(reverse_refs)
    }

    fn list_refs_under(&self, root: &Path) -> Result<Vec<SymRefName>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(root).to_path_buf();
                Error::io(path, std::io::Error::other(err.to_string()))
            })?;

            if entry.file_type().is_file()
                && let Ok(relative_path) = entry.path().strip_prefix(&self.path)
            {
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                names.push(SymRefName::new(name));
            }
        }

        Ok(names)
    }

    fn write_ref_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).at_path(parent)?;
        }

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .at_path(path)?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1).at_path(path)?;

        // truncate only once the lock is held
        lock.set_len(0).at_path(path)?;
        lock.deref_mut().write_all(content.as_bytes()).at_path(path)?;

        Ok(())
    }
}
