//! Object identifier (SHA-1 content address)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. Identical
//! content always yields the same ID.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHARD_PREFIX_LENGTH, SHORT_OID_LENGTH};
use crate::errors::{Error, Result};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Content address of an object
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Upper-case hex digits are accepted and normalized to lower case.
    pub fn try_parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidObjectId { id });
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Compute the address of raw bytes
    pub fn hash(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Convert to the shard-relative storage path
    ///
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(SHARD_PREFIX_LENGTH);
        PathBuf::from(dir).join(file)
    }

    pub fn shard_prefix(&self) -> &str {
        &self.0[..SHARD_PREFIX_LENGTH]
    }

    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
