use thiserror::Error;

/// Batch-level failures of the matching phase.
///
/// Scoring itself is total; only the surrounding worker machinery can fail,
/// and it fails for the whole batch rather than yielding partial results.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The worker pool could not be created.
    #[error("failed to build worker pool with {workers} workers: {message}")]
    WorkerPool { workers: usize, message: String },

    /// The batch was cancelled before every query was scored.
    #[error("matching cancelled after {completed} of {total} queries")]
    Cancelled { completed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, MatchError>;
