//! Structural cleanup of parent-teacher association names.

use crate::rule::{Rewrite, apply_rewrites};

const PTA_SPELLINGS: &[Rewrite] = &[(" PTFA ", " PTA "), (" PSA ", " PTA ")];

/// Tokens made redundant once a `PTA` marker is present.
const PTA_REDUNDANT: &[Rewrite] = &[
    (" PARENTS ", " "),
    (" PARENT ", " "),
    (" TEACHERS ", " "),
    (" TEACHER ", " "),
    (" FRIENDS ", " "),
    (" FRIEND ", " "),
    (" STAFF ", " "),
    (" ASSOC ", " "),
];

const PTA_MARKER: &str = " PTA ";

/// Fold parent-teacher association spellings onto a `PTA` token.
///
/// The result keeps the boundary padding it adds, so callers collapse
/// whitespace afterwards. A marker is appended once per matching pattern:
/// a name mentioning both teachers and staff gains two markers.
pub fn clean_name(name: &str) -> String {
    let mut name = apply_rewrites(format!(" {name} "), PTA_SPELLINGS.iter().copied());

    let parent_assoc = name.contains(" PARENT") && name.contains("ASSOC ");
    if parent_assoc && name.contains(" TEACHER") {
        name.push_str(PTA_MARKER);
    }
    if parent_assoc && name.contains(" STAFF") {
        name.push_str(PTA_MARKER);
    }

    if name.contains(PTA_MARKER) {
        name = apply_rewrites(name, PTA_REDUNDANT.iter().copied());
    }

    apply_rewrites(name, [(" CA ", " COMMUNITY ASSOC ")])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(name: &str) -> String {
        name.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn parent_teacher_association_becomes_pta() {
        assert_eq!(squash(&clean_name("OAK PARENT TEACHER ASSOC")), "OAK PTA");
        assert_eq!(
            squash(&clean_name("OAK PARENTS TEACHERS ASSOC")),
            "OAK PTA"
        );
    }

    #[test]
    fn teacher_and_staff_append_two_markers() {
        assert_eq!(
            squash(&clean_name("OAK PARENT TEACHER STAFF ASSOC")),
            "OAK PTA PTA"
        );
    }

    #[test]
    fn alternative_spellings_fold_to_pta() {
        assert_eq!(squash(&clean_name("OAK PTFA")), "OAK PTA");
        assert_eq!(squash(&clean_name("FRIENDS OAK PSA")), "OAK PTA");
    }

    #[test]
    fn tokens_kept_without_marker() {
        assert_eq!(
            squash(&clean_name("OAK FRIENDS STAFF FUND")),
            "OAK FRIENDS STAFF FUND"
        );
        assert_eq!(squash(&clean_name("ELM CA")), "ELM COMMUNITY ASSOC");
    }

    #[test]
    fn existing_pta_strips_redundant_tokens() {
        assert_eq!(squash(&clean_name("FRIENDS OAK PTA")), "OAK PTA");
    }
}
