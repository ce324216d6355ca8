use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::refs::revision::Revision;
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;

/// Where the tree reference of a new commit comes from
#[derive(Debug, Clone)]
pub enum TreeSource {
    /// Store this file and use its address
    File(PathBuf),
    /// Use an object that is already stored
    Object(String),
}

impl Repository {
    pub fn commit(
        &self,
        tree_source: &TreeSource,
        message: &str,
        writer: &mut impl Write,
    ) -> anyhow::Result<()> {
        let tree_oid = match tree_source {
            TreeSource::File(path) => {
                let blob = Blob::new(self.workspace().read_file(path)?);
                self.database().store(&blob)?
            }
            TreeSource::Object(revision) => Revision::try_parse(revision)?
                .resolve(self)?
                .with_context(|| format!("{revision} does not point to an object yet"))?,
        };

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit_id = self.write_commit(tree_oid, parent, message)?;
        self.refs()
            .update_head(&commit_id)
            .context("unable to update HEAD")?;

        let current_ref = self.refs().current_ref()?;
        let branch = if current_ref.is_head() {
            "detached HEAD"
        } else {
            current_ref.to_short_name()
        };
        let short_message = message.lines().next().unwrap_or("");

        writeln!(
            writer,
            "[{branch} {is_root}{}] {short_message}",
            commit_id.to_short_oid()
        )?;

        Ok(())
    }
}
