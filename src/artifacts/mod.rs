//! Value types and algorithms
//!
//! - `log`: Commit history traversal
//! - `objects`: Object IDs, blobs and commits
//! - `refs`: Ref names and revision expressions

pub mod log;
pub mod objects;
pub mod refs;
