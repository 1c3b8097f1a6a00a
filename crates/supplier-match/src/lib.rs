//! Top-K approximate matching of canonical names.
//!
//! A [`CandidateUniverse`] is built once per registry; [`match_top_k`] scores
//! one query against it and [`match_all`] fans a batch of queries out over a
//! worker pool.

pub mod batch;
pub mod engine;
pub mod process;
pub mod score;

pub use batch::{CancellationToken, match_all, match_all_sequential};
pub use engine::{CandidateUniverse, match_top_k};
pub use process::{Processed, default_process};
pub use score::{
    partial_ratio, partial_token_ratio, ratio, round_score, token_set_ratio, token_sort_ratio,
    weighted_ratio,
};
