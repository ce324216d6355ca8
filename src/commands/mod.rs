//! Command implementations
//!
//! Commands are thin `impl Repository` blocks over the core, split the way
//! git splits them:
//!
//! - `plumbing`: Direct object and ref access (hash-object, cat-file, rev-parse, show-ref)
//! - `porcelain`: Everyday workflows (init, add, commit, log, tag)
//!
//! Commands write their output to the writer they are given and never to
//! stdout directly.

pub mod plumbing;
pub mod porcelain;
