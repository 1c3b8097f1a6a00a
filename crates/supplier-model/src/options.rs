//! Configuration options for screening and matching.

use serde::{Deserialize, Serialize};

/// Number of candidates kept per query unless configured otherwise.
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Minimum length a supplier name must reach (raw or normalized) to be kept.
pub const DEFAULT_MIN_NAME_LEN: usize = 4;

/// Placeholder phrases that stand in for a supplier rather than naming one.
pub const DEFAULT_EXCLUDED_PHRASES: &[&str] = &[
    "SUCCESSFUL SUPPL",
    "SEE ATTACH",
    "REFER ATTACH",
    "CONTRACT WAS AWARD",
    "AWARDED SUPPLIERS",
    "SUCCESSFUL SUPPLIER",
    "PLEASE SEE",
    "NAMED IND",
    "REDACT",
    "PLEASE REFER",
];

/// Options controlling the matching batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Candidates returned per query.
    pub limit: usize,
    /// Worker threads; `0` uses one per available core.
    pub workers: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_MATCH_LIMIT,
            workers: 0,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// Options controlling which raw supplier names reach the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningOptions {
    /// Names shorter than this, both raw and normalized, are dropped.
    pub min_name_len: usize,
    /// Drop suppliers that parse as a number.
    pub drop_numeric: bool,
    /// Upper-case phrases marking redacted or placeholder suppliers.
    pub excluded_phrases: Vec<String>,
}

impl Default for ScreeningOptions {
    fn default() -> Self {
        Self {
            min_name_len: DEFAULT_MIN_NAME_LEN,
            drop_numeric: true,
            excluded_phrases: DEFAULT_EXCLUDED_PHRASES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl ScreeningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_name_len(mut self, len: usize) -> Self {
        self.min_name_len = len;
        self
    }

    #[must_use]
    pub fn with_drop_numeric(mut self, enable: bool) -> Self {
        self.drop_numeric = enable;
        self
    }

    #[must_use]
    pub fn with_excluded_phrases(mut self, phrases: Vec<String>) -> Self {
        self.excluded_phrases = phrases;
        self
    }
}
