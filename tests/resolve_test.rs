use setlistify::setlistfm::artists::{ResolveOutcome, classify_candidates, pick};
use setlistify::types::SetlistArtist;

// Helper to build a search result entry
fn artist(name: &str) -> SetlistArtist {
    SetlistArtist {
        mbid: format!("{}-mbid", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        disambiguation: String::new(),
    }
}

#[test]
fn test_single_plain_candidate_resolves() {
    let found = vec![
        artist("August Burns Red"),
        artist("August Burns Red feat. Jeremy McKinnon"),
    ];

    match classify_candidates(found) {
        ResolveOutcome::Single(a) => assert_eq!(a.name, "August Burns Red"),
        other => panic!("expected a single match, got {:?}", other),
    }
}

#[test]
fn test_all_featuring_candidates_yield_not_found() {
    let found = vec![
        artist("Somebody feat. Someone"),
        artist("Someone Else feat. Somebody"),
    ];

    assert!(matches!(classify_candidates(found), ResolveOutcome::NotFound));
}

#[test]
fn test_empty_search_yields_not_found() {
    assert!(matches!(classify_candidates(vec![]), ResolveOutcome::NotFound));
}

#[test]
fn test_multiple_candidates_preserve_order() {
    let found = vec![artist("Nirvana"), artist("Nirvana (UK)"), artist("Nirvana (tribute)")];

    match classify_candidates(found) {
        ResolveOutcome::Multiple(candidates) => {
            assert_eq!(candidates.len(), 3);
            assert_eq!(candidates[0].name, "Nirvana");
            assert_eq!(candidates[2].name, "Nirvana (tribute)");
        }
        other => panic!("expected multiple matches, got {:?}", other),
    }
}

#[test]
fn test_pick_is_one_based() {
    let candidates = vec![artist("First"), artist("Second"), artist("Third")];

    assert_eq!(pick(&candidates, 1).unwrap().name, "First");
    assert_eq!(pick(&candidates, 3).unwrap().name, "Third");
}

#[test]
fn test_pick_out_of_range_is_an_error() {
    let candidates = vec![artist("Only")];

    let err = pick(&candidates, 0).unwrap_err();
    assert_eq!(err.index, 0);
    assert_eq!(err.len, 1);

    assert!(pick(&candidates, 2).is_err());
}
