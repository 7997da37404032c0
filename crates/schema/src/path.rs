//! # Field Paths
//!
//! Locates a value inside a validated document so failures can be attributed
//! to the exact nested field, e.g. `scopes[1].attributes[0].key`.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// A single step into a JSON document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// An object member.
    Key(String),

    /// An array element.
    Index(usize),
}

/// Dotted and indexed path from the document root to a value.
///
/// The root path renders as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The document root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Extend the path with an object member.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.into()));
        Self(segments)
    }

    /// Extend the path with an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }

    /// Returns `true` when the path points at the document root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path's segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_and_indexed() {
        let path = Path::root().key("scopes").index(1).key("attributes").index(0).key("key");
        assert_eq!(path.to_string(), "scopes[1].attributes[0].key");
    }

    #[test]
    fn root_is_empty() {
        assert!(Path::root().is_root());
        assert_eq!(Path::root().to_string(), "");
        assert_eq!(Path::root().index(2).to_string(), "[2]");
    }

    #[test]
    fn segments() {
        let path = Path::root().key("resources").index(3);
        assert_eq!(path.segments(), &[Segment::Key("resources".into()), Segment::Index(3)]);
        assert!(Path::root().segments().is_empty());
    }
}
