pub mod error;
pub mod matching;
pub mod name;
pub mod options;
pub mod registry;

pub use error::{MatchError, Result};
pub use matching::{MatchCandidate, MatchResult};
pub use name::{CanonicalName, OrgMultiplicity};
pub use options::{
    DEFAULT_EXCLUDED_PHRASES, DEFAULT_MATCH_LIMIT, DEFAULT_MIN_NAME_LEN, MatchOptions,
    ScreeningOptions,
};
pub use registry::{ReferenceEntry, ReferenceRegistry, RegistryKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_result_reports_exact_best() {
        let result = MatchResult::new(
            CanonicalName::new("OAK PTA"),
            vec![
                MatchCandidate {
                    name: CanonicalName::new("OAK PTA"),
                    index: 3,
                    score: 100,
                },
                MatchCandidate {
                    name: CanonicalName::new("OAK PTFA"),
                    index: 0,
                    score: 93,
                },
            ],
        );
        assert!(result.has_exact());
        assert_eq!(result.best().map(|c| c.index), Some(3));
    }

    #[test]
    fn options_serialize() {
        let options = MatchOptions::new().with_limit(3).with_workers(2);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: MatchOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);

        let screening = ScreeningOptions::default();
        assert_eq!(screening.min_name_len, 4);
        assert!(screening.excluded_phrases.iter().any(|p| p == "REDACT"));
    }

    #[test]
    fn errors_render_batch_context() {
        let error = MatchError::Cancelled {
            completed: 2,
            total: 10,
        };
        assert_eq!(error.to_string(), "matching cancelled after 2 of 10 queries");
    }
}
