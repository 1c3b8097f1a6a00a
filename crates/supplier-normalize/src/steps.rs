//! Normalization steps that are not plain replacement tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::abbreviation::{collapse_abbreviations, strip_unprintable};
use crate::cleanup::clean_name;
use crate::rule::{RewriteStep, StepMetadata};
use crate::tables::{
    LEGAL_SUFFIX_REPLACEMENT, LEGAL_SUFFIX_VARIANTS, ORDINAL_MARKERS, ORDINAL_SUFFIXES,
};

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" +").expect("valid space-run pattern"));

/// A step backed by a plain string transform.
pub struct TransformStep {
    metadata: StepMetadata,
    transform: fn(String) -> String,
}

impl TransformStep {
    pub const fn new(metadata: StepMetadata, transform: fn(String) -> String) -> Self {
        Self {
            metadata,
            transform,
        }
    }
}

impl RewriteStep for TransformStep {
    fn metadata(&self) -> &StepMetadata {
        &self.metadata
    }

    fn apply(&self, name: String) -> String {
        (self.transform)(name)
    }
}

pub fn uppercase(name: String) -> String {
    name.to_uppercase()
}

/// Surround the name with single spaces so token patterns see both ends.
pub fn pad_boundaries(name: String) -> String {
    format!(" {name} ")
}

/// Collapse runs of spaces to one space. Tabs and newlines are left alone.
pub fn collapse_whitespace(name: String) -> String {
    SPACE_RUNS.replace_all(&name, " ").into_owned()
}

fn last_token(name: &str) -> Option<&str> {
    name.split_whitespace().next_back()
}

/// Fold a trailing truncation of `LIMITED` to `LTD`.
///
/// The first variant equal to the last token is replaced everywhere it
/// occurs in the name.
pub fn fold_legal_suffix(mut name: String) -> String {
    for &variant in LEGAL_SUFFIX_VARIANTS {
        if last_token(&name) == Some(variant) {
            name = name.replace(variant, LEGAL_SUFFIX_REPLACEMENT);
        }
    }
    name
}

/// Expand a trailing `CO` token to `COMPANY`.
pub fn expand_trailing_company(name: String) -> String {
    let trimmed = name.trim();
    if last_token(trimmed) != Some("CO") {
        return name;
    }
    let head = trimmed[..trimmed.len() - 2].trim_end();
    if head.is_empty() {
        " COMPANY ".to_string()
    } else {
        format!(" {head} COMPANY ")
    }
}

/// Strip wrapping quotes and unprintable characters, then collapse
/// single-letter runs.
pub fn collapse_spaced_letters(name: String) -> String {
    let mut name = name.trim();
    name = name.strip_prefix('"').unwrap_or(name);
    name = name.strip_suffix('"').unwrap_or(name);
    let printable = strip_unprintable(name);
    collapse_abbreviations(printable.trim())
}

pub fn structural_cleanup(name: String) -> String {
    clean_name(&name)
}

/// Append ` 1 `, ` 2 `, ` 3 ` after spelled ordinals, once.
pub fn append_ordinal_markers(mut name: String) -> String {
    for (word, digit) in ORDINAL_MARKERS {
        let marker = format!(" {digit} ");
        if name.contains(word) && !name.contains(&marker) {
            name.push_str(&marker);
        }
    }
    name
}

/// Drop `ST`, `ND`, `RD`, `TH` after a digit at the end of a token.
pub fn strip_ordinal_suffixes(mut name: String) -> String {
    for digit in 0..10 {
        let bare = format!("{digit} ");
        for suffix in ORDINAL_SUFFIXES {
            let suffixed = format!("{digit}{suffix} ");
            if name.contains(&suffixed) {
                name = name.replace(&suffixed, &bare);
            }
        }
    }
    name
}

/// Final whitespace, quote and case cleanup.
pub fn finish(name: String) -> String {
    collapse_whitespace(name.replace('"', ""))
        .trim()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_suffix_needs_trailing_token() {
        assert_eq!(fold_legal_suffix(" ABC LIMITED ".into()), " ABC LTD  ");
        assert_eq!(fold_legal_suffix(" ABC LIM ".into()), " ABC LTD  ");
        assert_eq!(
            fold_legal_suffix(" LIMITED EDITION PRINTS ".into()),
            " LIMITED EDITION PRINTS "
        );
    }

    #[test]
    fn trailing_co_becomes_company() {
        assert_eq!(expand_trailing_company(" ACME CO ".into()), " ACME COMPANY ");
        assert_eq!(expand_trailing_company(" CO ".into()), " COMPANY ");
        assert_eq!(expand_trailing_company(" CO OP ".into()), " CO OP ");
        assert_eq!(expand_trailing_company(" DISCO ".into()), " DISCO ");
    }

    #[test]
    fn ordinal_markers_are_not_repeated() {
        let once = append_ordinal_markers(" FIRST OAK ".into());
        assert_eq!(once, " FIRST OAK  1 ");
        assert_eq!(append_ordinal_markers(once.clone()), once);
        assert_eq!(
            append_ordinal_markers(" SECOND THIRD ".into()),
            " SECOND THIRD  2  3 "
        );
    }

    #[test]
    fn ordinal_suffixes_follow_digits_only() {
        assert_eq!(strip_ordinal_suffixes(" 21ST 3RD 4TH ".into()), " 21 3 4 ");
        assert_eq!(strip_ordinal_suffixes(" FIRST EAST ".into()), " FIRST EAST ");
    }

    #[test]
    fn quotes_and_control_characters_removed_before_collapse() {
        assert_eq!(collapse_spaced_letters(" \"P T A\" ".into()), "PTA");
        assert_eq!(collapse_spaced_letters("OAK\u{7}  TRUST".into()), "OAK  TRUST");
    }

    #[test]
    fn finish_trims_and_uppercases() {
        assert_eq!(finish("  oak   \"pta\" ".into()), "OAK PTA");
        assert_eq!(collapse_whitespace("A    B".into()), "A B");
    }

    #[test]
    fn finish_drops_quotes_before_collapsing() {
        assert_eq!(finish(" OAK \" TRUST ".into()), "OAK TRUST");
        assert_eq!(finish(" ELM \"\" SCOUTS ".into()), "ELM SCOUTS");
    }
}
