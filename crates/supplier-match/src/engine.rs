//! Top-K retrieval over a fixed candidate universe.

use supplier_model::{CanonicalName, MatchCandidate, MatchResult};

use crate::process::Processed;
use crate::score::{round_score, weighted_ratio};

/// An immutable, pre-processed list of candidate names.
///
/// Candidate order is significant: equal scores rank by position.
#[derive(Debug, Clone)]
pub struct CandidateUniverse {
    names: Vec<CanonicalName>,
    processed: Vec<Processed>,
}

impl CandidateUniverse {
    pub fn new(names: Vec<CanonicalName>) -> Self {
        let processed = names.iter().map(|n| Processed::new(n.as_str())).collect();
        Self { names, processed }
    }

    pub fn names(&self) -> &[CanonicalName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<CanonicalName> for CandidateUniverse {
    fn from_iter<I: IntoIterator<Item = CanonicalName>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

struct Scored {
    index: usize,
    score: f64,
}

/// Score `query` against every candidate and keep the best `k`.
///
/// Candidates are ordered by descending score, then by position in the
/// universe. Fewer than `k` are returned only when the universe is smaller.
pub fn match_top_k(query: &CanonicalName, universe: &CandidateUniverse, k: usize) -> MatchResult {
    let processed_query = Processed::new(query.as_str());
    let mut best: Vec<Scored> = Vec::with_capacity(k + 1);

    if k > 0 {
        for (index, candidate) in universe.processed.iter().enumerate() {
            let score = weighted_ratio(&processed_query, candidate);
            if best.len() == k && best.last().is_some_and(|last| last.score >= score) {
                continue;
            }
            let position = best.partition_point(|kept| kept.score >= score);
            best.insert(position, Scored { index, score });
            best.truncate(k);
        }
    }

    let candidates = best
        .into_iter()
        .map(|scored| MatchCandidate {
            name: universe.names[scored.index].clone(),
            index: scored.index,
            score: round_score(scored.score),
        })
        .collect();
    MatchResult::new(query.clone(), candidates)
}
