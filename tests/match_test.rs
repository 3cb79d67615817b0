use setlistify::Res;
use setlistify::spotify::tracks::match_many_with;

fn songs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_partial_failures_never_abort_the_batch() {
    // 5 songs: one with no search hit, one with a transport failure
    let setlist_songs = songs(&["A", "B", "C", "D", "E"]);

    let report = match_many_with("August Burns Red", &setlist_songs, |song| {
        let res: Res<Option<String>> = match song.as_str() {
            "B" => Ok(None),
            "D" => Err("search backend unavailable".into()),
            found => Ok(Some(format!("spotify:track:{}", found.to_lowercase()))),
        };
        async move { res }
    })
    .await;

    assert_eq!(report.matches.len(), 5);
    assert_eq!(report.missing_count(), 2);
    assert_eq!(
        report.track_uris(),
        vec!["spotify:track:a", "spotify:track:c", "spotify:track:e"]
    );
}

#[tokio::test]
async fn test_all_found_preserves_performance_order() {
    let setlist_songs = songs(&["Composure", "Marianas Trench", "Ghosts"]);

    let report = match_many_with("August Burns Red", &setlist_songs, |song| {
        let uri = format!("spotify:track:{}", song.replace(' ', "-"));
        async move { Ok(Some(uri)) }
    })
    .await;

    assert_eq!(report.missing_count(), 0);
    assert_eq!(
        report.track_uris(),
        vec![
            "spotify:track:Composure",
            "spotify:track:Marianas-Trench",
            "spotify:track:Ghosts"
        ]
    );
    assert!(report.matches.iter().all(|m| m.found()));
}

#[tokio::test]
async fn test_unfound_matches_carry_no_uri() {
    let setlist_songs = songs(&["Obscure Cover"]);

    let report = match_many_with("Some Band", &setlist_songs, |_| async move { Ok(None) }).await;

    assert_eq!(report.missing_count(), 1);
    assert!(report.track_uris().is_empty());
    assert!(!report.matches[0].found());
    assert!(report.matches[0].uri.is_none());
}
