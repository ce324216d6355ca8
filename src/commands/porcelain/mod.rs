//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the object store, refs and history walk into
//! everyday workflows.
//!
//! ## Commands
//!
//! - `init`: Create a new repository
//! - `add`: Store file contents as objects
//! - `commit`: Record a snapshot and advance the current branch
//! - `log`: Show commit history
//! - `tag`: List or create lightweight tags

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod tag;
