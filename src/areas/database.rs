//! Content-addressable object store
//!
//! Objects live under `.git/objects/<aa>/<rest>` where `aa` is the shard
//! prefix of their address. Writes are write-once: an object that already
//! exists on disk is never rewritten.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHARD_PREFIX_LENGTH};
use crate::errors::{Error, IoContext, Result};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Address of `content`; pure, touches no file.
    pub fn address(content: &[u8]) -> ObjectId {
        ObjectId::hash(content)
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Store `content` under its address and return the address.
    ///
    /// Calling this repeatedly with the same bytes is a no-op after the
    /// first call.
    pub fn write(&self, content: &[u8]) -> Result<ObjectId> {
        let object_id = Self::address(content);
        let object_path = self.object_path(&object_id);

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let object_dir = self.path.join(object_id.shard_prefix());
        if object_dir.exists() && !object_dir.is_dir() {
            return Err(Error::not_a_directory(object_dir));
        }
        std::fs::create_dir_all(&object_dir).at_path(&object_dir)?;

        self.write_object(&object_dir, &object_path, content)?;
        tracing::debug!(oid = %object_id, bytes = content.len(), "stored new object");

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Packable) -> Result<ObjectId> {
        self.write(&object.serialize())
    }

    pub fn read(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::object_not_found(object_id.as_ref()))
            }
            Err(err) => Err(Error::io(object_path, err)),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        let content = self.read(object_id)?;
        Commit::deserialize(&content)
    }

    // the temp file is renamed into place so that a concurrent reader never
    // sees a partially written object; on failure it is removed when dropped
    fn write_object(&self, object_dir: &Path, object_path: &Path, content: &[u8]) -> Result<()> {
        let mut temp_file = NamedTempFile::new_in(object_dir).at_path(object_dir)?;
        temp_file.write_all(content).at_path(temp_file.path())?;

        temp_file
            .persist(object_path)
            .map_err(|err| Error::io(object_path, err.error))?;

        Ok(())
    }

    /// Find all objects whose address starts with the given prefix.
    ///
    /// Prefixes of two or more characters only scan their own shard
    /// directory; shorter prefixes scan every shard.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let mut matches = Vec::new();

        let shards = if prefix.len() >= SHARD_PREFIX_LENGTH {
            vec![prefix[..SHARD_PREFIX_LENGTH].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        for shard in shards {
            let dir_path = self.path.join(&shard);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path).at_path(&dir_path)? {
                let entry = entry.at_path(&dir_path)?;
                let full_oid = format!("{shard}{}", entry.file_name().to_string_lossy());

                if full_oid.len() == OBJECT_ID_LENGTH
                    && full_oid.starts_with(&prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }
}
