use proptest::prelude::*;
use supplier_normalize::{Normalizer, count_organisations, normalize};

const SAMPLES: &[&str] = &[
    "1st Oakville Scout Group",
    "ABC Limited",
    "ABC Community Interest Company",
    "The Board of Trustees",
    "Oak Parent Teacher Association",
    "Oak P T A",
    "St. Mary's C of E School",
    "North Yorkshire Scouts",
    "Acme & Co",
    "Friends of Elm School PTFA",
    "Hampshire County Council",
    "",
];

fn tokens(name: &str) -> Vec<&str> {
    name.split(' ').collect()
}

#[test]
fn legal_suffix_folds_to_ltd() {
    assert!(normalize("ABC LIMITED").as_str().ends_with("LTD"));
    assert_eq!(normalize("abc limited").as_str(), "ABC LTD");
    assert_eq!(normalize("ABC LTD").as_str(), "ABC LTD");
}

#[test]
fn community_interest_company_becomes_cic() {
    assert!(tokens(normalize("ABC COMMUNITY INTEREST COMPANY").as_str()).contains(&"CIC"));
    assert_eq!(normalize("ABC C I C").as_str(), "ABC CIC");
}

#[test]
fn scout_group_numbering() {
    let name = normalize("1ST OAKVILLE SCOUT GROUP");
    assert_eq!(name.as_str(), "FIRST OAKVILLE SCOUTS 1");
    assert!(!name.as_str().contains("SCOUT GROUP"));
}

#[test]
fn stop_words_are_removed() {
    let name = normalize("THE BOARD OF TRUSTEES");
    let words = tokens(name.as_str());
    assert!(!words.contains(&"THE"));
    assert!(!words.contains(&"OF"));
    assert_eq!(name.as_str(), "BOARD TRUSTEES");
}

#[test]
fn spaced_letters_collapse_before_cleanup() {
    assert_eq!(normalize(" P T A ").as_str(), "PTA");
    assert_eq!(normalize("OAK P T A").as_str(), "OAK PTA");
    assert_eq!(normalize("OAK PARENT TEACHER ASSOCIATION").as_str(), "OAK PTA");
    assert_eq!(normalize("St. Mary's C of E School").as_str(), "ST MARYS CE SCHOOL");
}

#[test]
fn county_abbreviation_applies_once() {
    assert_eq!(normalize("NORTH YORKSHIRE SCOUTS").as_str(), "NORTH YORKS SCOUTS");
    assert_eq!(normalize("NORTH YORKS SCOUTS").as_str(), "NORTH YORKS SCOUTS");
    assert_eq!(normalize("YORKSHIRE YORKS").as_str(), "YORKS YORKS");
}

#[test]
fn trailing_co_expands() {
    assert_eq!(normalize("Acme & Co").as_str(), "ACME COMPANY");
}

#[test]
fn canonical_names_are_fixed_points() {
    for raw in SAMPLES {
        let once = normalize(raw);
        let twice = normalize(once.as_str());
        assert_eq!(once, twice, "re-normalizing {raw:?}");
    }
}

#[test]
fn stray_quotes_leave_single_spacing() {
    for raw in ["OAK \" TRUST", "\"OAK\" \" TRUST", "OAK TRUST"] {
        let once = normalize(raw);
        assert_eq!(once.as_str(), "OAK TRUST", "normalizing {raw:?}");
        assert_eq!(normalize(once.as_str()), once);
    }
}

#[test]
fn literal_expansions_grow_on_renormalization() {
    let once = normalize("ELM AVE");
    assert_eq!(once.as_str(), "ELM AVENUE");
    let twice = normalize(once.as_str());
    assert_eq!(twice.as_str(), "ELM AVENUENUE");
    assert_ne!(once, twice);

    let services = normalize(normalize("HEALTH SERVICES").as_str());
    assert!(services.as_str().contains("SERVICEICEICES"));
}

#[test]
fn default_normalizer_matches_free_function() {
    let normalizer = Normalizer::default();
    for raw in SAMPLES {
        assert_eq!(normalizer.normalize(raw), normalize(raw));
    }
}

#[test]
fn canonical_names_snapshot() {
    let rendered = SAMPLES
        .iter()
        .map(|raw| format!("{raw:?} -> {:?}", normalize(raw).as_str()))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered);
}

#[test]
fn multiplicity_examples() {
    let single = count_organisations("Oak Primary School");
    assert_eq!((single.name.as_str(), single.count), ("OAK PRIMARY SCHOOL", 1));

    let repeated = count_organisations("Oak PTA, Oak PTA");
    assert_eq!((repeated.name.as_str(), repeated.count), ("OAK PTA", 1));

    let ambiguous = count_organisations("Oak PTA, Elm Trust");
    assert_eq!(
        (ambiguous.name.as_str(), ambiguous.count),
        ("Oak PTA, Elm Trust", 2)
    );
}

proptest! {
    #[test]
    fn normalize_is_total_and_canonical(raw in "\\PC{0,60}") {
        let name = normalize(&raw);
        let text = name.as_str();
        prop_assert_eq!(text, text.trim());
        prop_assert!(text.chars().all(|c| (' '..='~').contains(&c)));
        prop_assert!(!text.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert!(!text.contains('"'));
        prop_assert!(!text.contains("  "));
    }

    #[test]
    fn normalize_is_deterministic(raw in "[A-Za-z0-9 .,&'()-]{0,40}") {
        prop_assert_eq!(normalize(&raw), normalize(&raw));
        prop_assert_eq!(normalize(&raw), Normalizer::new().normalize(&raw));
    }

    #[test]
    fn comma_free_names_are_single(raw in "[A-Za-z ]{0,30}") {
        let result = count_organisations(&raw);
        prop_assert_eq!(result.count, 1);
        prop_assert_eq!(result.name, raw.to_uppercase());
    }
}
