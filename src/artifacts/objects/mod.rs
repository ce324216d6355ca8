//! Object types and operations
//!
//! All content is stored as immutable objects identified by the SHA-1 of
//! their bytes. This engine knows two kinds of payload:
//!
//! - **Blob**: raw file content, stored verbatim
//! - **Commit**: a tree reference, an optional parent and a message
//!
//! Objects carry no type header and are not compressed; the bytes on disk
//! are exactly the bytes that were hashed.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Number of leading hex characters used as the shard directory name
pub const SHARD_PREFIX_LENGTH: usize = 2;

/// Length of an abbreviated object ID
pub const SHORT_OID_LENGTH: usize = 7;
