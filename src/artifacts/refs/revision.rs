use crate::areas::repository::Repository;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::RefName;
use crate::artifacts::refs::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES};
use crate::errors::{Error, Result};

/// Minimum length of an abbreviated object ID
const MIN_ABBREV_LENGTH: usize = 4;

/// A revision expression naming an object.
///
/// Supports:
/// - Ref names: `HEAD`, `master`, `refs/tags/v1`, `v1`
/// - Aliases: `@` (resolves to `HEAD`)
/// - Full or abbreviated (4+ characters) object IDs
/// - Parent notation: `<revision>^`
/// - Ancestor notation: `<revision>~<n>`
///
/// A name that matches both a ref and an object ID prefix resolves as the
/// ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Ref(RefName),
    Ancestor(Box<Revision>, usize),
    Parent(Box<Revision>),
}

impl Revision {
    pub fn try_parse(revision: &str) -> Result<Revision> {
        let unknown = || Error::UnknownRevision {
            revision: revision.to_string(),
        };
        let parent_regex = regex::Regex::new(PARENT_REGEX).map_err(|_| unknown())?;
        let ancestor_regex = regex::Regex::new(ANCESTOR_REGEX).map_err(|_| unknown())?;

        if let Some(caps) = parent_regex.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(caps) = ancestor_regex.captures(revision) {
            let generations = caps[2].parse::<usize>().map_err(|_| unknown())?;
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else {
            let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);

            Ok(Revision::Ref(RefName::try_parse(resolved_name)?))
        }
    }

    /// Resolve to an object ID; `None` when the revision names an unborn
    /// branch or walks past the root commit
    pub fn resolve(&self, repository: &Repository) -> Result<Option<ObjectId>> {
        match self {
            Revision::Ref(name) => match repository.refs().find_ref(name.as_ref()) {
                Some(sym_ref_name) => repository.refs().resolve(&sym_ref_name),
                None if Self::looks_like_oid(name.as_ref()) => {
                    Self::resolve_oid(name.as_ref(), repository).map(Some)
                }
                None => Err(Error::UnknownRevision {
                    revision: name.to_string(),
                }),
            },
            Revision::Parent(base_revision) => {
                Self::resolve_commit_parent(base_revision.resolve(repository)?, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_commit_parent(
        oid: Option<ObjectId>,
        repository: &Repository,
    ) -> Result<Option<ObjectId>> {
        match oid {
            Some(oid) => {
                let commit = repository.database().parse_object_as_commit(&oid)?;
                Ok(commit.parent().cloned())
            }
            None => Ok(None),
        }
    }

    fn resolve_oid(oid_str: &str, repository: &Repository) -> Result<ObjectId> {
        if oid_str.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(oid_str)?;
            if !repository.database().exists(&oid) {
                return Err(Error::object_not_found(oid.as_ref()));
            }
            return Ok(oid);
        }

        let mut matches = repository.database().find_objects_by_prefix(oid_str)?;

        match matches.len() {
            0 => Err(Error::UnknownRevision {
                revision: oid_str.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::AmbiguousRevision {
                revision: oid_str.to_string(),
                candidates: matches.iter().map(ObjectId::to_short_oid).collect(),
            }),
        }
    }

    fn looks_like_oid(s: &str) -> bool {
        (MIN_ABBREV_LENGTH..=OBJECT_ID_LENGTH).contains(&s.len())
            && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}
