//! Repository configuration (`.git/config`)
//!
//! The file is INI-style. Only the `[core]` section is interpreted; other
//! sections and keys are ignored on load. All three `core` fields are
//! required and are checked when the file is read, not on first use.

use crate::errors::{Error, IoContext, Result};
use std::collections::HashMap;
use std::path::Path;

/// The only repository format this engine reads and writes.
pub const SUPPORTED_FORMAT_VERSION: u32 = 0;

const CORE_SECTION: &str = "core";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repository_format_version: u32,
    /// Tracked but not enforced.
    pub filemode: bool,
    /// Whether the repository has a worktree.
    pub bare: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository_format_version: SUPPORTED_FORMAT_VERSION,
            filemode: false,
            bare: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MissingConfig {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).at_path(path)?;
        Self::parse(&content).map_err(|reason| Error::invalid_config(path, reason))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize()).at_path(path)
    }

    pub fn serialize(&self) -> String {
        format!(
            "[{CORE_SECTION}]\n\trepositoryformatversion = {}\n\tfilemode = {}\n\tbare = {}\n",
            self.repository_format_version, self.filemode, self.bare
        )
    }

    /// Parse config text, returning a human-readable reason on failure.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let sections = parse_sections(content)?;
        let core = sections
            .get(CORE_SECTION)
            .ok_or_else(|| format!("missing [{CORE_SECTION}] section"))?;

        let required = |key: &str| {
            core.get(key)
                .map(String::as_str)
                .ok_or_else(|| format!("missing {CORE_SECTION}.{key}"))
        };

        let version = required("repositoryformatversion")?;
        let repository_format_version = version
            .parse::<u32>()
            .map_err(|_| format!("invalid {CORE_SECTION}.repositoryformatversion '{version}'"))?;

        Ok(Config {
            repository_format_version,
            filemode: parse_bool("filemode", required("filemode")?)?,
            bare: parse_bool("bare", required("bare")?)?,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("invalid {CORE_SECTION}.{key} '{value}'")),
    }
}

type Sections = HashMap<String, HashMap<String, String>>;

fn parse_sections(content: &str) -> std::result::Result<Sections, String> {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or_else(|| format!("line {}: unterminated section header", number + 1))?;
            let name = name.trim().to_ascii_lowercase();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let section = current
            .as_ref()
            .ok_or_else(|| format!("line {}: option outside of a section", number + 1))?;
        let (key, value) = trimmed
            .split_once('=')
            .ok_or_else(|| format!("line {}: expected 'key = value'", number + 1))?;

        sections
            .entry(section.clone())
            .or_default()
            .insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn default_config_serializes_to_core_section() {
        assert_eq!(
            Config::default().serialize(),
            "[core]\n\trepositoryformatversion = 0\n\tfilemode = false\n\tbare = false\n"
        );
    }

    #[test]
    fn parse_reads_back_serialized_config() {
        let config = Config {
            repository_format_version: 0,
            filemode: true,
            bare: false,
        };

        assert_eq!(Config::parse(&config.serialize()).unwrap(), config);
    }

    #[test]
    fn parse_ignores_comments_and_unknown_sections() {
        let content = r#"
# written by hand
[core]
    repositoryformatversion = 1
    FileMode = yes
    bare = off

[user]
    name = Someone
"#;

        assert_eq!(
            Config::parse(content).unwrap(),
            Config {
                repository_format_version: 1,
                filemode: true,
                bare: false,
            }
        );
    }

    #[rstest]
    #[case::no_core_section("[user]\n\tname = x\n")]
    #[case::missing_version("[core]\n\tfilemode = false\n\tbare = false\n")]
    #[case::missing_bare("[core]\n\trepositoryformatversion = 0\n\tfilemode = false\n")]
    #[case::non_numeric_version("[core]\n\trepositoryformatversion = zero\n\tfilemode = false\n\tbare = false\n")]
    #[case::invalid_bool("[core]\n\trepositoryformatversion = 0\n\tfilemode = maybe\n\tbare = false\n")]
    #[case::option_before_section("bare = false\n")]
    #[case::unterminated_header("[core\n")]
    fn parse_rejects(#[case] content: &str) {
        assert!(Config::parse(content).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("config");

        assert!(matches!(
            Config::load(&path),
            Err(Error::MissingConfig { .. })
        ));
    }

    #[test]
    fn load_reports_invalid_content_with_path() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, "[core]\n").unwrap();

        match Config::load(&path) {
            Err(Error::InvalidConfig { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }
}
