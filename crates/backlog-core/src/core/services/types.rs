//! Identifiers accepted by resource operations.
//!
//! Each one renders to the path segment the API expects and is checked
//! before any request is built.

use crate::Result;
use crate::error::ValidationError;
use crate::utils::validation::{require_non_empty, require_positive};
use std::fmt;

/// A project addressed by numeric id or by project key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectIdOrKey {
    Id(i64),
    Key(String),
}

/// An issue addressed by numeric id or by issue key (`PRJ-123`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueIdOrKey {
    Id(i64),
    Key(String),
}

/// A git repository addressed by numeric id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryIdOrName {
    Id(i64),
    Name(String),
}

macro_rules! id_or_text {
    ($ty:ident, $text:ident, $id_name:literal, $text_name:literal, $reserved:expr) => {
        impl $ty {
            /// Path segment for this identifier.
            pub fn segment(&self) -> Result<String> {
                match self {
                    $ty::Id(id) => {
                        require_positive($id_name, *id)?;
                        Ok(id.to_string())
                    }
                    $ty::$text(text) => {
                        require_non_empty($text_name, text)?;
                        if $reserved.contains(&text.as_str()) {
                            return Err(ValidationError::new(format!(
                                "{} must not be '{}'",
                                $text_name, text
                            ))
                            .into());
                        }
                        Ok(text.clone())
                    }
                }
            }
        }

        impl From<i64> for $ty {
            fn from(id: i64) -> Self {
                $ty::Id(id)
            }
        }

        impl From<&str> for $ty {
            fn from(text: &str) -> Self {
                $ty::$text(text.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(text: String) -> Self {
                $ty::$text(text)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $ty::Id(id) => write!(f, "{}", id),
                    $ty::$text(text) => write!(f, "{}", text),
                }
            }
        }
    };
}

id_or_text!(ProjectIdOrKey, Key, "projectId", "projectKey", [""; 0]);
id_or_text!(IssueIdOrKey, Key, "issueId", "issueKey", [""; 0]);
id_or_text!(RepositoryIdOrName, Name, "repositoryId", "repositoryName", ["0"]);

/// Numeric id of a single resource (user, wiki, attachment, pull request).
pub(crate) fn id_segment(name: &str, id: i64) -> Result<String> {
    require_positive(name, id)?;
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_segment() {
        assert_eq!(ProjectIdOrKey::from(12).segment().expect("id"), "12");
        assert_eq!(ProjectIdOrKey::from("TEST").segment().expect("key"), "TEST");
    }

    #[test]
    fn test_invalid_identifiers_are_validation_errors() {
        let cases = [
            ProjectIdOrKey::from(0).segment(),
            ProjectIdOrKey::from(-3).segment(),
            ProjectIdOrKey::from("").segment(),
            IssueIdOrKey::from(0).segment(),
            IssueIdOrKey::from("").segment(),
            RepositoryIdOrName::from(0).segment(),
            RepositoryIdOrName::from("").segment(),
            RepositoryIdOrName::from("0").segment(),
        ];
        for result in cases {
            assert!(result.is_err_and(|e| e.is_validation()));
        }
    }

    #[test]
    fn test_repository_name() {
        let repo = RepositoryIdOrName::from("backlog-api");
        assert_eq!(repo.segment().expect("name"), "backlog-api");
        assert_eq!(repo.to_string(), "backlog-api");
    }

    #[test]
    fn test_id_segment() {
        assert_eq!(id_segment("wikiId", 7).expect("positive"), "7");
        let err = id_segment("wikiId", 0).expect_err("zero");
        assert_eq!(err.to_string(), "wikiId must be 1 or more");
    }
}
