use proptest::prelude::*;
use supplier_match::{CancellationToken, CandidateUniverse, match_all, match_top_k};
use supplier_model::{CanonicalName, MatchOptions};
use supplier_normalize::normalize;

fn registry_universe(raw: &[&str]) -> CandidateUniverse {
    raw.iter().map(|name| normalize(name)).collect()
}

#[test]
fn normalized_supplier_finds_registry_entry() {
    let universe = registry_universe(&[
        "Elm Tree Trust",
        "Oakville Parent Teacher Association",
        "1st Oakville Scout Group",
        "Oakville Scouts",
        "North Yorkshire Cricket Club",
    ]);

    let query = normalize("Oakville P.T.A.");
    assert_eq!(query.as_str(), "OAKVILLE PTA");
    let result = match_top_k(&query, &universe, 5);
    let best = result.best().expect("candidate");
    assert_eq!(best.name.as_str(), "OAKVILLE PTA");
    assert_eq!(best.score, 100);
    assert_eq!(result.candidates.len(), 5);
}

#[test]
fn batch_covers_every_query() {
    let universe = registry_universe(&["Oak PTA", "Elm Trust"]);
    let queries: Vec<CanonicalName> = ["oak pta", "elm trust", "ash", ""]
        .iter()
        .map(|raw| normalize(raw))
        .collect();

    let results = match_all(
        &queries,
        &universe,
        &MatchOptions::default(),
        &CancellationToken::new(),
        &|| {},
    )
    .expect("batch");
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.candidates.len() == 2));
    assert!(results[0].has_exact());
    assert!(results[1].has_exact());
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,8}( [A-Z]{1,8}){0,3}"
}

proptest! {
    #[test]
    fn top_k_is_ordered_and_bounded(
        names in prop::collection::vec(name_strategy(), 1..40),
        query in name_strategy(),
        k in 0usize..8,
    ) {
        let universe: CandidateUniverse = names.iter().map(CanonicalName::new).collect();
        let result = match_top_k(&CanonicalName::new(query), &universe, k);

        prop_assert_eq!(result.candidates.len(), k.min(names.len()));
        for pair in result.candidates.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for candidate in &result.candidates {
            prop_assert!(candidate.score <= 100);
            prop_assert_eq!(&names[candidate.index], candidate.name.as_str());
        }
    }

    #[test]
    fn exact_member_ranks_first(
        names in prop::collection::vec(name_strategy(), 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let universe: CandidateUniverse = names.iter().map(CanonicalName::new).collect();
        let query = CanonicalName::new(pick.get(&names).clone());
        let result = match_top_k(&query, &universe, 5);
        let best = result.best().expect("non-empty universe");

        prop_assert_eq!(&best.name, &query);
        prop_assert_eq!(best.score, 100);
    }

    #[test]
    fn repeated_calls_agree(
        names in prop::collection::vec(name_strategy(), 1..20),
        query in name_strategy(),
    ) {
        let universe: CandidateUniverse = names.iter().map(CanonicalName::new).collect();
        let query = CanonicalName::new(query);
        prop_assert_eq!(match_top_k(&query, &universe, 5), match_top_k(&query, &universe, 5));
    }
}
