use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn hash_object(
        &self,
        object_path: &Path,
        write: bool,
        writer: &mut impl Write,
    ) -> anyhow::Result<()> {
        let blob = Blob::new(self.workspace().read_file(object_path)?);

        let object_id = if write {
            self.database().store(&blob)?
        } else {
            blob.object_id()
        };

        writeln!(writer, "{object_id}")?;

        Ok(())
    }
}
