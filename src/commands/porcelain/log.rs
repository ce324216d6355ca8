use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::SymRefName;
use crate::artifacts::refs::revision::Revision;
use crate::artifacts::refs::{HEADS_PREFIX, TAGS_PREFIX};
use anyhow::Context;
use colored::Colorize;
use std::collections::HashMap;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
    pub max_count: Option<usize>,
    pub decorate: bool,
}

impl Repository {
    pub fn log(
        &self,
        revision: Option<&str>,
        opts: &LogOptions,
        writer: &mut impl Write,
    ) -> anyhow::Result<()> {
        let revision = revision.unwrap_or("HEAD");
        let start = Revision::try_parse(revision)?.resolve(self)?;

        let Some(start) = start else {
            tracing::debug!(revision, "no commits to show");
            return Ok(());
        };

        let reverse_refs = if opts.decorate {
            self.refs().reverse_refs()?
        } else {
            HashMap::new()
        };
        let current_ref = self.refs().current_ref()?;

        let history = self.history(start).take(opts.max_count.unwrap_or(usize::MAX));
        for (index, entry) in history.enumerate() {
            let (commit_oid, commit) = entry.context("unable to read commit history")?;
            let decoration = Self::commit_decoration(
                reverse_refs.get(&commit_oid).map(Vec::as_slice),
                &current_ref,
            );

            if opts.oneline {
                Self::show_commit_oneline(writer, &commit_oid, &commit, &decoration)?;
            } else {
                if index > 0 {
                    writeln!(writer)?;
                }
                Self::show_commit_medium(writer, &commit_oid, &commit, &decoration)?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(
        writer: &mut impl Write,
        commit_oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
    ) -> anyhow::Result<()> {
        writeln!(
            writer,
            "{}{}",
            format!("commit {commit_oid}").yellow(),
            decoration
        )?;
        writeln!(writer)?;
        for message_line in commit.message().lines() {
            writeln!(writer, "    {message_line}")?;
        }

        Ok(())
    }

    fn show_commit_oneline(
        writer: &mut impl Write,
        commit_oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
    ) -> anyhow::Result<()> {
        writeln!(
            writer,
            "{}{} {}",
            commit_oid.to_short_oid().yellow(),
            decoration,
            commit.short_message()
        )?;

        Ok(())
    }

    /// ` (HEAD -> master, tag: v1)` style suffix, empty when undecorated
    fn commit_decoration(ref_names: Option<&[SymRefName]>, current_ref: &SymRefName) -> String {
        let Some(ref_names) = ref_names else {
            return String::new();
        };

        let head_here = ref_names.iter().any(SymRefName::is_head);
        let mut names = Vec::new();

        if head_here && current_ref.is_head() {
            names.push("HEAD".cyan().bold().to_string());
        }

        for ref_name in ref_names.iter().filter(|ref_name| !ref_name.is_head()) {
            let name = if ref_name.as_ref_path().starts_with(TAGS_PREFIX) {
                format!("tag: {}", ref_name.to_short_name()).yellow().bold()
            } else if ref_name.as_ref_path().starts_with(HEADS_PREFIX) {
                ref_name.to_short_name().green().bold()
            } else {
                ref_name.as_ref_path().red().bold()
            };

            if head_here && ref_name == current_ref {
                names.push(format!("{} -> {name}", "HEAD".cyan().bold()));
            } else {
                names.push(name.to_string());
            }
        }

        if names.is_empty() {
            String::new()
        } else {
            format!(" {}{}{}", "(".yellow(), names.join(", "), ")".yellow())
        }
    }
}
