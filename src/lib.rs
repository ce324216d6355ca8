//! A minimal content-addressed version-control engine.
//!
//! Immutable objects are stored under the SHA-1 of their bytes, commits link
//! snapshots into a parent chain, and refs name the tips of that chain.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
