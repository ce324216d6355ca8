use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// List every ref under `refs/` that points at an object
    pub fn show_ref(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        for sym_ref_name in self.refs().list_refs()? {
            if let Some(object_id) = self.refs().resolve(&sym_ref_name)? {
                writeln!(writer, "{object_id} {sym_ref_name}")?;
            }
        }

        Ok(())
    }
}
