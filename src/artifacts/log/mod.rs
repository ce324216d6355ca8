//! Commit history traversal
//!
//! - `rev_list`: lazy walk from a commit back to the root of history
//!
//! The walk reads one commit per step, so a consumer that stops early
//! (`log -n 5`) never touches the rest of the chain.

pub mod rev_list;
