//! Core repository components
//!
//! - `config`: The `[core]` section of `.git/config`
//! - `database`: Content-addressable object store
//! - `refs`: Reference management (HEAD, branches, tags)
//! - `repository`: Repository layout, creation and validation
//! - `workspace`: Reading worktree files handed to the store

pub mod config;
pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
