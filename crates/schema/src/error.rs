//! # Validation Failures
//!
//! Failures are returned, never raised. Each one carries the path of the
//! offending field so callers can report every problem found in a document
//! and map failure kinds to their own error responses.

use std::fmt::{self, Display};
use std::slice;

use serde::Serialize;
use thiserror::Error;

use crate::path::Path;

/// The reason a field failed validation.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// The value is present but has the wrong JSON type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The JSON type the rule accepts.
        expected: &'static str,

        /// The JSON type that was supplied.
        found: &'static str,
    },

    /// The string is not one of the canonical tokens, in any case.
    #[error(r#"invalid value "{found}", expected one of: {}"#, .allowed.join(", "))]
    InvalidEnumValue {
        /// The supplied string, as received.
        found: String,

        /// The canonical tokens, in declaration order.
        allowed: Vec<&'static str>,
    },

    /// A required field is absent or `null`.
    #[error("missing required field")]
    MissingRequired,

    /// The string does not conform to the expected format.
    #[error("invalid {format} format")]
    InvalidFormat {
        /// The name of the expected format.
        format: &'static str,
    },
}

/// A single field-level failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Location of the failing value.
    pub path: Path,

    /// What was wrong with it.
    #[serde(flatten)]
    pub kind: FailureKind,
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Every failure recorded during one top-level validation call.
///
/// Serializes as a JSON array of failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Failures(Vec<Failure>);

impl Failures {
    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the failures in the order they were found.
    pub fn iter(&self) -> slice::Iter<'_, Failure> {
        self.0.iter()
    }

    /// The failure recorded at `path`, if any.
    #[must_use]
    pub fn at(&self, path: &str) -> Option<&Failure> {
        self.0.iter().find(|f| f.path.to_string() == path)
    }

    pub(crate) fn push(&mut self, failure: Failure) {
        self.0.push(failure);
    }
}

impl std::error::Error for Failure {}

impl Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.0.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for Failures {}

impl IntoIterator for Failures {
    type IntoIter = std::vec::IntoIter<Failure>;
    type Item = Failure;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type IntoIter = slice::Iter<'a, Failure>;
    type Item = &'a Failure;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn display() {
        let failure = Failure {
            path: Path::root().key("order").key("credentialDuration"),
            kind: FailureKind::TypeMismatch { expected: "number", found: "string" },
        };
        assert_eq!(failure.to_string(), "order.credentialDuration: expected number, found string");

        let failure = Failure {
            path: Path::root().key("action"),
            kind: FailureKind::InvalidEnumValue {
                found: "NOPE".to_string(),
                allowed: vec!["ok", "forbidden"],
            },
        };
        assert_eq!(
            failure.to_string(),
            r#"action: invalid value "NOPE", expected one of: ok, forbidden"#
        );
    }

    #[test]
    fn serialize() {
        let mut failures = Failures::default();
        failures.push(Failure {
            path: Path::root().key("scopes").index(1).key("name"),
            kind: FailureKind::MissingRequired,
        });

        let value = serde_json::to_value(&failures).expect("should serialize");
        assert_eq!(value, json!([{"path": "scopes[1].name", "kind": "missing_required"}]));
    }

    #[test]
    fn iterate() {
        let mut failures = Failures::default();
        failures.push(Failure { path: Path::root().key("a"), kind: FailureKind::MissingRequired });
        failures.push(Failure {
            path: Path::root().key("b").index(0),
            kind: FailureKind::InvalidFormat { format: "uri" },
        });

        let paths: Vec<String> = (&failures).into_iter().map(|f| f.path.to_string()).collect();
        assert_eq!(paths, ["a", "b[0]"]);

        let kinds: Vec<FailureKind> = failures.into_iter().map(|f| f.kind).collect();
        assert_eq!(kinds[1], FailureKind::InvalidFormat { format: "uri" });
    }
}
