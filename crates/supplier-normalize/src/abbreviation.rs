//! Collapsing of spaced-out abbreviations such as `P T A`.

use std::sync::LazyLock;

use regex::Regex;

static UNPRINTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x20-\x7E]").expect("valid unprintable pattern"));

/// Remove everything outside printable ASCII.
pub fn strip_unprintable(name: &str) -> String {
    UNPRINTABLE.replace_all(name, "").into_owned()
}

/// Collapse every run of single characters separated by single spaces.
///
/// The name is padded with a space on both sides, then scanned left to
/// right. Where a run `" X Y "` starts it is extended greedily (`" X Y Z "`,
/// ...) and the first occurrence of the run in the current string is
/// replaced by its space-free form (`" XYZ "`). The scan continues at the
/// next position of the rewritten string. The result is trimmed.
///
/// ```
/// use supplier_normalize::collapse_abbreviations;
///
/// assert_eq!(collapse_abbreviations("OAK P T A"), "OAK PTA");
/// assert_eq!(collapse_abbreviations("C OF E SCHOOL"), "C OF E SCHOOL");
/// ```
pub fn collapse_abbreviations(name: &str) -> String {
    let mut chars: Vec<char> = format!(" {name} ").chars().collect();
    let mut pos = 0;
    while pos + 5 <= chars.len() {
        if is_run_start(&chars, pos) {
            let mut run_len = 4;
            while pos + run_len + 2 < chars.len()
                && chars[pos + run_len + 1] != ' '
                && chars[pos + run_len + 2] == ' '
            {
                run_len += 2;
            }
            let long: Vec<char> = chars[pos..=pos + run_len].to_vec();
            let mut short = Vec::with_capacity(long.len() / 2 + 2);
            short.push(' ');
            short.extend(long.iter().filter(|ch| **ch != ' '));
            short.push(' ');
            replace_first(&mut chars, &long, &short);
        }
        pos += 1;
    }
    chars.into_iter().collect::<String>().trim().to_string()
}

/// Whether `space, char, space, char, space` starts at `pos`.
fn is_run_start(chars: &[char], pos: usize) -> bool {
    chars[pos] == ' '
        && chars[pos + 1] != ' '
        && chars[pos + 2] == ' '
        && chars[pos + 3] != ' '
        && chars[pos + 4] == ' '
}

fn replace_first(haystack: &mut Vec<char>, needle: &[char], replacement: &[char]) {
    if let Some(start) = haystack
        .windows(needle.len())
        .position(|window| window == needle)
    {
        haystack.splice(start..start + needle.len(), replacement.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_two_and_three_letter_runs() {
        assert_eq!(collapse_abbreviations("P T A"), "PTA");
        assert_eq!(collapse_abbreviations("OAK P T A FUND"), "OAK PTA FUND");
        assert_eq!(collapse_abbreviations("A B"), "AB");
        assert_eq!(collapse_abbreviations("N H S TRUST"), "NHS TRUST");
    }

    #[test]
    fn leaves_multi_letter_tokens_alone() {
        assert_eq!(collapse_abbreviations("OAK SCHOOL"), "OAK SCHOOL");
        assert_eq!(collapse_abbreviations("ST A"), "ST A");
        assert_eq!(collapse_abbreviations(""), "");
    }

    #[test]
    fn collapses_separate_runs_independently() {
        assert_eq!(
            collapse_abbreviations("A B SCHOOL C D"),
            "AB SCHOOL CD"
        );
    }

    #[test]
    fn strips_control_and_non_ascii_characters() {
        assert_eq!(strip_unprintable("CAF\u{e9}\tBAR\n"), "CAFBAR");
        assert_eq!(strip_unprintable("PLAIN NAME"), "PLAIN NAME");
    }
}
