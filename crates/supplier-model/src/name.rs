//! Name types produced by normalization and multiplicity detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical, comparable form of an organisation name.
///
/// Upper-case, ASCII-only, trimmed, with organisation-type, geography and
/// synonym tokens folded to a fixed vocabulary. Values are only produced by
/// the normalizer or read back from a prepared registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Wrap an already-canonical string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes (canonical names are ASCII, so also in characters).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CanonicalName> for String {
    fn from(name: CanonicalName) -> Self {
        name.0
    }
}

/// How many distinct organisations a raw supplier string denotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMultiplicity {
    /// The single resolved organisation name when `count == 1`, otherwise the
    /// raw input unchanged.
    pub name: String,
    /// Number of distinct organisations detected. Zero when a comma-joined
    /// string had no fragment long enough to count.
    pub count: usize,
}

impl OrgMultiplicity {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Whether the string denotes exactly one organisation and may be matched.
    pub fn is_single(&self) -> bool {
        self.count == 1
    }
}
