use serde::{Deserialize, Serialize};

use crate::name::CanonicalName;

/// One ranked candidate for a query name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Matched canonical name from the candidate universe.
    pub name: CanonicalName,
    /// Position of the candidate in the universe it was drawn from.
    pub index: usize,
    /// Similarity in 0..=100, higher is more similar.
    pub score: u8,
}

/// The ranked candidates for one query, best first.
///
/// Computed once per unique query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub query: CanonicalName,
    pub candidates: Vec<MatchCandidate>,
}

impl MatchResult {
    pub fn new(query: CanonicalName, candidates: Vec<MatchCandidate>) -> Self {
        Self { query, candidates }
    }

    pub fn best(&self) -> Option<&MatchCandidate> {
        self.candidates.first()
    }

    /// Whether the best candidate scored the maximum.
    pub fn has_exact(&self) -> bool {
        self.best().is_some_and(|c| c.score == 100)
    }
}
