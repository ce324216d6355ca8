//! Blob object
//!
//! Blobs hold the raw bytes handed to `add`. They carry no file name or
//! mode; a blob's address doubles as the tree reference of a commit.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::errors::Result;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        self.content.clone()
    }
}

impl Unpackable for Blob {
    fn deserialize(content: &[u8]) -> Result<Self> {
        Ok(Self::new(Bytes::copy_from_slice(content)))
    }
}
