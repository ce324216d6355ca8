use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Store the bytes of each file and print `<oid> <path>` per file
    pub fn add(&self, paths: &[PathBuf], writer: &mut impl Write) -> anyhow::Result<()> {
        for path in paths {
            let relative_path = self.workspace().relative_path(path)?;
            let blob = Blob::new(self.workspace().read_file(path)?);

            let object_id = self
                .database()
                .store(&blob)
                .with_context(|| format!("unable to store {}", relative_path.display()))?;

            writeln!(writer, "{object_id} {}", relative_path.display())?;
        }

        Ok(())
    }
}
