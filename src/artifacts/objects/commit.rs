//! Commit object
//!
//! Commits record a snapshot by address and link backwards to their parent.
//! They contain:
//! - A tree object ID (the recorded content)
//! - At most one parent commit ID (absent for the root of history)
//! - A free-form commit message
//!
//! ## Format
//!
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//!
//! <commit message>
//! ```
//!
//! The `parent` line is omitted entirely for a root commit. The message is
//! kept verbatim, so identical inputs always serialize to identical bytes.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;

const TREE_HEADER: &str = "tree";
const PARENT_HEADER: &str = "parent";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Tree object ID representing the recorded snapshot
    tree_oid: ObjectId,
    /// Parent commit ID (None for the root commit)
    parent: Option<ObjectId>,
    message: String,
}

impl Commit {
    pub fn new(tree_oid: ObjectId, parent: Option<ObjectId>, message: impl Into<String>) -> Self {
        Commit {
            tree_oid,
            parent,
            message: message.into(),
        }
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `log --oneline`)
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn into_parts(self) -> (ObjectId, Option<ObjectId>, String) {
        (self.tree_oid, self.parent, self.message)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let mut content = format!("{TREE_HEADER} {}\n", self.tree_oid);
        if let Some(parent) = &self.parent {
            content.push_str(&format!("{PARENT_HEADER} {parent}\n"));
        }
        content.push('\n');
        content.push_str(&self.message);

        Bytes::from(content)
    }
}

impl Unpackable for Commit {
    fn deserialize(content: &[u8]) -> Result<Self> {
        let content = std::str::from_utf8(content)
            .map_err(|_| Error::malformed_commit("payload is not valid UTF-8"))?;

        let mut tree_oid = None;
        let mut parent = None;
        let mut rest = content;

        // headers run until the first empty line; everything after it is the message
        let message = loop {
            let (line, remainder) = rest
                .split_once('\n')
                .ok_or_else(|| Error::malformed_commit("missing blank line after headers"))?;
            rest = remainder;

            if line.is_empty() {
                break rest;
            }

            let (key, value) = line
                .split_once(' ')
                .ok_or_else(|| Error::malformed_commit(format!("invalid header line '{line}'")))?;

            match key {
                TREE_HEADER if tree_oid.is_none() && parent.is_none() => {
                    tree_oid = Some(parse_header_oid(key, value)?);
                }
                PARENT_HEADER if tree_oid.is_some() && parent.is_none() => {
                    parent = Some(parse_header_oid(key, value)?);
                }
                TREE_HEADER | PARENT_HEADER => {
                    return Err(Error::malformed_commit(format!(
                        "unexpected '{key}' header position"
                    )));
                }
                _ => {
                    return Err(Error::malformed_commit(format!(
                        "unrecognized header '{key}'"
                    )));
                }
            }
        };

        let tree_oid = match tree_oid {
            Some(tree_oid) => tree_oid,
            None if message.starts_with(&format!("{TREE_HEADER} ")) => {
                return Err(Error::malformed_commit(
                    "headers found after the blank line separator",
                ));
            }
            None => return Err(Error::malformed_commit("missing tree header")),
        };

        Ok(Commit::new(tree_oid, parent, message))
    }
}

fn parse_header_oid(key: &str, value: &str) -> Result<ObjectId> {
    ObjectId::try_parse(value)
        .map_err(|_| Error::malformed_commit(format!("invalid {key} address '{value}'")))
}
