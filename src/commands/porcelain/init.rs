use crate::areas::repository::Repository;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn init(path: &Path, writer: &mut impl Write) -> anyhow::Result<Repository> {
        let repository = Repository::create(path)?;

        writeln!(
            writer,
            "Initialized empty Git repository in {}",
            repository.git_dir().display()
        )?;

        Ok(repository)
    }
}
