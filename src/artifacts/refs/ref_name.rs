use crate::artifacts::refs::{HEADS_PREFIX, INVALID_REF_NAME_REGEX, TAGS_PREFIX};
use crate::errors::{Error, Result};
use derive_new::new;

/// Path of a ref relative to the control directory, e.g. `HEAD` or
/// `refs/heads/master`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn head() -> Self {
        Self::new(crate::areas::refs::HEAD_REF_NAME.to_string())
    }

    pub fn branch(name: &RefName) -> Self {
        Self::new(format!("{HEADS_PREFIX}{name}"))
    }

    pub fn tag(name: &RefName) -> Self {
        Self::new(format!("{TAGS_PREFIX}{name}"))
    }

    pub fn is_head(&self) -> bool {
        self.0 == crate::areas::refs::HEAD_REF_NAME
    }

    pub fn as_ref_path(&self) -> &str {
        &self.0
    }

    /// Name without its `refs/heads/` or `refs/tags/` prefix
    pub fn to_short_name(&self) -> &str {
        self.0
            .strip_prefix(HEADS_PREFIX)
            .or_else(|| self.0.strip_prefix(TAGS_PREFIX))
            .unwrap_or(&self.0)
    }
}

impl AsRef<str> for SymRefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymRefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-supplied ref name checked against the usual ref-format rules
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidRefName { name });
        }

        let re = regex::Regex::new(INVALID_REF_NAME_REGEX)
            .map_err(|_| Error::InvalidRefName { name: name.clone() })?;

        if re.is_match(&name) {
            Err(Error::InvalidRefName { name })
        } else {
            Ok(Self(name))
        }
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
