use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::refs::revision::Revision;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Write the raw bytes of the object named by `revision`
    pub fn cat_file(&self, revision: &str, writer: &mut impl Write) -> anyhow::Result<()> {
        let object_id = Revision::try_parse(revision)?
            .resolve(self)?
            .with_context(|| format!("{revision} does not point to an object yet"))?;

        let blob = Blob::deserialize(&self.database().read(&object_id)?)?;
        writer.write_all(blob.content())?;

        Ok(())
    }
}
