//! Parallel batch matching across a bounded worker pool.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;
use supplier_model::{CanonicalName, MatchError, MatchOptions, MatchResult, Result};
use tracing::{debug, info_span};

use crate::engine::{CandidateUniverse, match_top_k};

/// Cooperative cancellation flag shared between a batch and its caller.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every in-flight batch holding this token to stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Match every query against `universe`, one result per query in input order.
///
/// Queries are scored independently on a pool of `options.workers` threads
/// (`0` for one per core) and the call returns once all of them are done.
/// `on_progress` runs after each scored query. A cancelled batch or a pool
/// that cannot be built fails as a whole; no partial results are returned.
pub fn match_all(
    queries: &[CanonicalName],
    universe: &CandidateUniverse,
    options: &MatchOptions,
    cancel: &CancellationToken,
    on_progress: &(dyn Fn() + Sync),
) -> Result<Vec<MatchResult>> {
    let total = queries.len();
    let span = info_span!(
        "match_all",
        queries = total,
        candidates = universe.len(),
        workers = options.workers
    );
    let _guard = span.enter();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers)
        .build()
        .map_err(|error| MatchError::WorkerPool {
            workers: options.workers,
            message: error.to_string(),
        })?;

    let completed = AtomicUsize::new(0);
    let results: Option<Vec<MatchResult>> = pool.install(|| {
        queries
            .par_iter()
            .map(|query| {
                if cancel.is_cancelled() {
                    return None;
                }
                let result = match_top_k(query, universe, options.limit);
                completed.fetch_add(1, Ordering::Relaxed);
                on_progress();
                Some(result)
            })
            .collect()
    });

    match results {
        Some(results) => {
            debug!(results = results.len(), "batch complete");
            Ok(results)
        }
        None => Err(MatchError::Cancelled {
            completed: completed.load(Ordering::Relaxed),
            total,
        }),
    }
}

/// Sequential form of [`match_all`] for small batches and tests.
pub fn match_all_sequential(
    queries: &[CanonicalName],
    universe: &CandidateUniverse,
    limit: usize,
) -> Vec<MatchResult> {
    queries
        .iter()
        .map(|query| match_top_k(query, universe, limit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<CanonicalName> {
        values.iter().map(|v| CanonicalName::new(*v)).collect()
    }

    #[test]
    fn results_follow_query_order() {
        let universe = CandidateUniverse::new(names(&["OAK PTA", "ELM TRUST", "ASH SCOUTS"]));
        let queries = names(&["ASH SCOUTS", "OAK PTA", "", "ELM TRUST"]);
        let options = MatchOptions::new().with_workers(2);

        let results = match_all(&queries, &universe, &options, &CancellationToken::new(), &|| {})
            .expect("batch");
        assert_eq!(results.len(), queries.len());
        for (query, result) in queries.iter().zip(&results) {
            assert_eq!(&result.query, query);
            assert!(result.candidates.len() <= 5);
        }
        assert_eq!(results[0].best().map(|c| c.index), Some(2));
        assert_eq!(results[1].best().map(|c| c.index), Some(0));
        assert!(results[2].candidates.iter().all(|c| c.score == 0));
        assert_eq!(results, match_all_sequential(&queries, &universe, 5));
    }

    #[test]
    fn progress_is_reported_per_query() {
        let universe = CandidateUniverse::new(names(&["OAK PTA"]));
        let queries = names(&["OAK", "ELM", "ASH"]);
        let ticks = AtomicUsize::new(0);
        match_all(
            &queries,
            &universe,
            &MatchOptions::new().with_workers(1),
            &CancellationToken::new(),
            &|| {
                ticks.fetch_add(1, Ordering::Relaxed);
            },
        )
        .expect("batch");
        assert_eq!(ticks.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn cancelled_batch_fails_whole() {
        let universe = CandidateUniverse::new(names(&["OAK PTA"]));
        let queries = names(&["OAK", "ELM"]);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let error = match_all(&queries, &universe, &MatchOptions::new(), &cancel, &|| {})
            .expect_err("cancelled");
        assert!(matches!(error, MatchError::Cancelled { total: 2, .. }));
    }
}
