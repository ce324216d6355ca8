use crate::areas::repository::Repository;
use crate::artifacts::refs::ref_name::{RefName, SymRefName};
use crate::artifacts::refs::revision::Revision;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// List tags, or create a lightweight tag at `revision` (default HEAD)
    pub fn tag(
        &self,
        name: Option<&str>,
        revision: Option<&str>,
        writer: &mut impl Write,
    ) -> anyhow::Result<()> {
        let Some(name) = name else {
            for tag in self.refs().list_tags()? {
                writeln!(writer, "{}", tag.to_short_name())?;
            }
            return Ok(());
        };

        let tag = SymRefName::tag(&RefName::try_parse(name)?);
        if self.refs().exists(&tag) {
            anyhow::bail!("tag '{name}' already exists");
        }

        let revision = revision.unwrap_or("HEAD");
        let object_id = Revision::try_parse(revision)?
            .resolve(self)?
            .with_context(|| format!("failed to resolve '{revision}' as a valid ref"))?;

        self.refs().create_ref(&tag, &object_id)?;

        Ok(())
    }
}
