use crate::areas::repository::Repository;
use crate::artifacts::refs::revision::Revision;
use std::io::Write;

impl Repository {
    pub fn rev_parse(&self, revision: &str, writer: &mut impl Write) -> anyhow::Result<()> {
        match Revision::try_parse(revision)?.resolve(self)? {
            Some(object_id) => writeln!(writer, "{object_id}")?,
            None => anyhow::bail!("ambiguous argument '{revision}': unknown revision"),
        }

        Ok(())
    }
}
