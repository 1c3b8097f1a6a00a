//! Token-based similarity scores in `0.0..=100.0`.
//!
//! All scorers operate on [`Processed`] strings. The weighted score combines
//! a plain edit ratio with token-sort, token-set and partial ratios depending
//! on how different the two lengths are.

use std::collections::{BTreeSet, HashSet};

use rapidfuzz::distance::indel;

use crate::process::Processed;

/// Down-weighting applied to token-based ratios.
const UNBASE_SCALE: f64 = 0.95;

/// Length ratio below which both strings are compared whole.
const WHOLE_COMPARISON_MAX_LEN_RATIO: f64 = 1.5;

/// Length ratio up to which partial ratios keep most of their weight.
const PARTIAL_LEN_RATIO: f64 = 8.0;

/// Normalized indel similarity of two char slices.
pub fn ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    indel::normalized_similarity(a.iter().copied(), b.iter().copied()) * 100.0
}

fn str_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

fn norm_distance(dist: usize, len_sum: usize) -> f64 {
    if len_sum == 0 {
        return 100.0;
    }
    100.0 - 100.0 * dist as f64 / len_sum as f64
}

/// Best ratio of the shorter string against any window of the longer one.
pub fn partial_ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return if a.is_empty() && b.is_empty() { 100.0 } else { 0.0 };
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut best = partial_windows(short, long);
    if best < 100.0 && short.len() == long.len() {
        best = best.max(partial_windows(long, short));
    }
    best
}

fn partial_windows(short: &[char], long: &[char]) -> f64 {
    let short_len = short.len();
    let long_len = long.len();
    let alphabet: HashSet<char> = short.iter().copied().collect();
    let mut best: f64 = 0.0;

    // Windows growing in from the left edge.
    for end in 1..short_len {
        if !alphabet.contains(&long[end - 1]) {
            continue;
        }
        best = best.max(ratio(short, &long[..end]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Full-width windows.
    for start in 0..long_len - short_len {
        if !alphabet.contains(&long[start + short_len - 1]) {
            continue;
        }
        best = best.max(ratio(short, &long[start..start + short_len]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Windows shrinking towards the right edge.
    for start in long_len - short_len..long_len {
        if !alphabet.contains(&long[start]) {
            continue;
        }
        best = best.max(ratio(short, &long[start..]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    best
}

fn joined<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}

/// Ratio of the two token lists after sorting.
pub fn token_sort_ratio(a: &Processed, b: &Processed) -> f64 {
    str_ratio(
        &joined(a.sorted_tokens().iter().map(String::as_str)),
        &joined(b.sorted_tokens().iter().map(String::as_str)),
    )
}

struct TokenSets<'a> {
    intersection: BTreeSet<&'a str>,
    diff_ab: BTreeSet<&'a str>,
    diff_ba: BTreeSet<&'a str>,
}

impl<'a> TokenSets<'a> {
    fn new(a: &'a Processed, b: &'a Processed) -> Option<Self> {
        let set_a: BTreeSet<&str> = a.sorted_tokens().iter().map(String::as_str).collect();
        let set_b: BTreeSet<&str> = b.sorted_tokens().iter().map(String::as_str).collect();
        if set_a.is_empty() || set_b.is_empty() {
            return None;
        }
        Some(Self {
            intersection: set_a.intersection(&set_b).copied().collect(),
            diff_ab: set_a.difference(&set_b).copied().collect(),
            diff_ba: set_b.difference(&set_a).copied().collect(),
        })
    }

    /// One side's tokens are a subset of the other's.
    fn is_subset(&self) -> bool {
        !self.intersection.is_empty() && (self.diff_ab.is_empty() || self.diff_ba.is_empty())
    }
}

/// Compare the shared tokens against each side's full token set.
pub fn token_set_ratio(a: &Processed, b: &Processed) -> f64 {
    let Some(sets) = TokenSets::new(a, b) else {
        return 0.0;
    };
    if sets.is_subset() {
        return 100.0;
    }

    let diff_ab = joined(sets.diff_ab.iter().copied());
    let diff_ba = joined(sets.diff_ba.iter().copied());
    let ab_len = diff_ab.chars().count();
    let ba_len = diff_ba.chars().count();
    let sect_len = joined(sets.intersection.iter().copied()).chars().count();

    let separator = usize::from(sect_len != 0);
    let sect_ab_len = sect_len + separator + ab_len;
    let sect_ba_len = sect_len + separator + ba_len;

    let dist = indel::distance(diff_ab.chars(), diff_ba.chars());
    let result = norm_distance(dist, sect_ab_len + sect_ba_len);
    if sect_len == 0 {
        return result;
    }

    // Only the differences separate "sect" from "sect + diff".
    let sect_ab_ratio = norm_distance(separator + ab_len, sect_len + sect_ab_len);
    let sect_ba_ratio = norm_distance(separator + ba_len, sect_len + sect_ba_len);
    result.max(sect_ab_ratio).max(sect_ba_ratio)
}

/// Partial ratio over sorted tokens; any shared token scores 100.
pub fn partial_token_ratio(a: &Processed, b: &Processed) -> f64 {
    let Some(sets) = TokenSets::new(a, b) else {
        return 0.0;
    };
    if !sets.intersection.is_empty() {
        return 100.0;
    }

    let sorted_a: Vec<char> = joined(a.sorted_tokens().iter().map(String::as_str))
        .chars()
        .collect();
    let sorted_b: Vec<char> = joined(b.sorted_tokens().iter().map(String::as_str))
        .chars()
        .collect();
    let result = partial_ratio(&sorted_a, &sorted_b);

    if a.sorted_tokens().len() == sets.diff_ab.len() && b.sorted_tokens().len() == sets.diff_ba.len()
    {
        return result;
    }

    let diff_ab: Vec<char> = joined(sets.diff_ab.iter().copied()).chars().collect();
    let diff_ba: Vec<char> = joined(sets.diff_ba.iter().copied()).chars().collect();
    result.max(partial_ratio(&diff_ab, &diff_ba))
}

/// Weighted similarity choosing scorers by relative length.
///
/// Returns 0 when either side is empty after processing.
pub fn weighted_ratio(a: &Processed, b: &Processed) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (len_a, len_b) = (a.len() as f64, b.len() as f64);
    let len_ratio = if len_a > len_b {
        len_a / len_b
    } else {
        len_b / len_a
    };

    let whole = ratio(a.chars(), b.chars());
    if len_ratio < WHOLE_COMPARISON_MAX_LEN_RATIO {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return whole.max(token * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio <= PARTIAL_LEN_RATIO { 0.9 } else { 0.6 };
    let partial = partial_ratio(a.chars(), b.chars()) * partial_scale;
    let partial_token = partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale;
    whole.max(partial).max(partial_token)
}

/// Round a score half-to-even onto `0..=100`.
pub fn round_score(score: f64) -> u8 {
    score.round_ties_even().clamp(0.0, 100.0) as u8
}
