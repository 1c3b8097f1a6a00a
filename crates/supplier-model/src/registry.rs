//! Reference registries: the authoritative organisation lists matched against.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::name::CanonicalName;

/// Which authoritative register a registry was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegistryKind {
    /// The companies register.
    Companies,
    /// The public spine of charities and public bodies.
    PublicSpine,
}

impl RegistryKind {
    /// Short prefix used in match-table column names and output file names.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Companies => "ch",
            Self::PublicSpine => "spine",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Companies => "Companies register",
            Self::PublicSpine => "Public spine",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// One organisation in a reference registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Registry identifier (company number, spine uid).
    pub id: String,
    /// Name as published by the registry.
    pub raw_name: String,
    /// Normalized form of `raw_name`.
    pub canonical: CanonicalName,
    /// Remaining source columns (address, postcode, dates, ...).
    pub metadata: BTreeMap<String, String>,
}

/// An ordered registry whose canonical names are unique.
///
/// Any canonical name shared by two or more entries is removed entirely at
/// construction time because such entries cannot be told apart.
#[derive(Debug, Clone)]
pub struct ReferenceRegistry {
    kind: RegistryKind,
    entries: Vec<ReferenceEntry>,
    index: HashMap<CanonicalName, usize>,
    collisions: usize,
}

impl ReferenceRegistry {
    /// Build a registry, dropping every entry whose canonical name collides
    /// with another entry's, and every entry with an empty canonical name.
    pub fn from_entries(kind: RegistryKind, entries: Vec<ReferenceEntry>) -> Self {
        let mut occurrences: HashMap<&CanonicalName, usize> = HashMap::new();
        for entry in &entries {
            *occurrences.entry(&entry.canonical).or_default() += 1;
        }
        let keep: Vec<bool> = entries
            .iter()
            .map(|entry| !entry.canonical.is_empty() && occurrences[&entry.canonical] == 1)
            .collect();
        let collisions = keep.iter().filter(|kept| !**kept).count();

        let entries: Vec<ReferenceEntry> = entries
            .into_iter()
            .zip(keep)
            .filter_map(|(entry, kept)| kept.then_some(entry))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.canonical.clone(), idx))
            .collect();

        Self {
            kind,
            entries,
            index,
            collisions,
        }
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of input entries dropped as collisions or empty names.
    pub fn dropped(&self) -> usize {
        self.collisions
    }

    /// The candidate universe, in registry order.
    pub fn canonical_names(&self) -> Vec<CanonicalName> {
        self.entries.iter().map(|e| e.canonical.clone()).collect()
    }

    /// Join a matched canonical name back to its registry entry.
    pub fn lookup(&self, canonical: &CanonicalName) -> Option<&ReferenceEntry> {
        self.index.get(canonical).map(|&idx| &self.entries[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, raw: &str, canonical: &str) -> ReferenceEntry {
        ReferenceEntry {
            id: id.to_string(),
            raw_name: raw.to_string(),
            canonical: CanonicalName::new(canonical),
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn colliding_names_are_dropped_entirely() {
        let registry = ReferenceRegistry::from_entries(
            RegistryKind::Companies,
            vec![
                entry("1", "Oak Ltd", "OAK LTD"),
                entry("2", "Elm Trust", "ELM TRUST"),
                entry("3", "OAK LIMITED", "OAK LTD"),
                entry("4", "...", ""),
            ],
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dropped(), 3);
        assert_eq!(registry.entries()[0].id, "2");
        assert!(registry.lookup(&CanonicalName::new("OAK LTD")).is_none());
    }

    #[test]
    fn lookup_joins_back_to_identifier() {
        let registry = ReferenceRegistry::from_entries(
            RegistryKind::PublicSpine,
            vec![
                entry("GB-CHC-1", "Oak PTA", "OAK PTA"),
                entry("GB-CHC-2", "Elm Scouts", "ELM SCOUTS"),
            ],
        );
        let found = registry
            .lookup(&CanonicalName::new("ELM SCOUTS"))
            .expect("entry");
        assert_eq!(found.id, "GB-CHC-2");
        assert_eq!(
            registry.canonical_names(),
            vec![CanonicalName::new("OAK PTA"), CanonicalName::new("ELM SCOUTS")]
        );
    }

    #[test]
    fn prefixes_follow_register() {
        assert_eq!(RegistryKind::Companies.prefix(), "ch");
        assert_eq!(RegistryKind::PublicSpine.to_string(), "spine");
    }
}
