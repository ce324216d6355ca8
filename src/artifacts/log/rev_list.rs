use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::iter::FusedIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TraversalState {
    /// Next commit to read and parse
    Pending(ObjectId),
    /// The last yielded commit had no parent
    Done,
    /// A read or parse failed; the error has been yielded
    Failed,
}

/// Lazy walk down the first-parent chain
///
/// Yields `(address, commit)` pairs from the start commit back to the root.
/// A missing or malformed commit is yielded once as `Err` and ends the walk,
/// so running out of items never hides a broken chain.
#[derive(Debug, Clone)]
pub struct RevList<'r> {
    database: &'r Database,
    state: TraversalState,
}

impl<'r> RevList<'r> {
    /// Start a walk at `start`; `None` (an unborn branch) yields nothing
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        let state = match start {
            Some(oid) => TraversalState::Pending(oid),
            None => TraversalState::Done,
        };

        RevList { database, state }
    }

    pub fn is_failed(&self) -> bool {
        self.state == TraversalState::Failed
    }
}

impl Iterator for RevList<'_> {
    type Item = Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = match std::mem::replace(&mut self.state, TraversalState::Done) {
            TraversalState::Pending(commit_oid) => commit_oid,
            TraversalState::Done => return None,
            TraversalState::Failed => {
                self.state = TraversalState::Failed;
                return None;
            }
        };

        match self.database.parse_object_as_commit(&commit_oid) {
            Ok(commit) => {
                if let Some(parent) = commit.parent() {
                    self.state = TraversalState::Pending(parent.clone());
                }

                Some(Ok((commit_oid, commit)))
            }
            Err(err) => {
                tracing::warn!(oid = %commit_oid, error = %err, "history traversal failed");
                self.state = TraversalState::Failed;

                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for RevList<'_> {}
