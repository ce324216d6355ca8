//! Plumbing commands (low-level operations)
//!
//! Plumbing commands give direct access to objects and refs. They're
//! primarily used for scripting and as building blocks for porcelain
//! commands.
//!
//! ## Commands
//!
//! - `hash-object`: Compute an object ID and optionally store the object
//! - `cat-file`: Print the raw bytes of an object
//! - `rev-parse`: Resolve a revision expression to an object ID
//! - `show-ref`: List refs and the objects they point to

pub mod cat_file;
pub mod hash_object;
pub mod rev_parse;
pub mod show_ref;
pub mod write_commit;
