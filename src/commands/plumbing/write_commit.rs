use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;

impl Repository {
    /// Serialize a commit and store it, returning its address.
    ///
    /// The parent is recorded by address only; it does not have to exist.
    pub fn write_commit(
        &self,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        message: &str,
    ) -> Result<ObjectId> {
        let commit = Commit::new(tree_oid, parent, message);
        let commit_id = self.database().store(&commit)?;
        tracing::info!(oid = %commit_id, root = commit.is_root(), "wrote commit");

        Ok(commit_id)
    }
}
