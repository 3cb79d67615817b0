use std::future::Future;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    Res, config,
    management::TokenManager,
    types::{MatchReport, TokenFlow, TrackMatch, TrackSearchResponse},
    warning,
};

/// Looks up one performed song in the catalog.
///
/// Sends a combined free-text query of song and artist name and takes the
/// first returned track as the match. Zero results yield `Ok(None)`.
pub async fn search_track(
    token_mgr: &TokenManager,
    song: &str,
    artist: &str,
) -> Res<Option<String>> {
    let token = token_mgr.current_token(TokenFlow::ClientCredentials).await?;

    let client = Client::new();
    let response = client
        .get(format!("{}/search", config::spotify_apiurl()))
        .query(&[
            ("q", format!("{} {}", song, artist)),
            ("type", "track,artist".to_string()),
            ("limit", "1".to_string()),
        ])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<TrackSearchResponse>().await?;
    Ok(res
        .tracks
        .and_then(|tracks| tracks.items.into_iter().next())
        .map(|track| track.uri))
}

/// Matches one song, absorbing failures.
///
/// A transport or auth error marks the song as unfound with a warning
/// instead of failing: one unmatched song must never sink the batch.
pub async fn match_one(token_mgr: &TokenManager, song: &str, artist: &str) -> TrackMatch {
    let uri = match search_track(token_mgr, song, artist).await {
        Ok(uri) => uri,
        Err(e) => {
            warning!("Track search failed for \"{}\": {}", song, e);
            None
        }
    };

    TrackMatch {
        song: song.to_string(),
        artist: artist.to_string(),
        uri,
    }
}

/// Matches every song of a setlist in performance order.
pub async fn match_many(token_mgr: &TokenManager, artist: &str, songs: &[String]) -> MatchReport {
    let pb = ProgressBar::new(songs.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    let report = match_many_with(artist, songs, |song| {
        pb.inc(1);
        pb.set_message(song.clone());
        async move { search_track(token_mgr, &song, artist).await }
    })
    .await;

    pb.finish_and_clear();
    report
}

/// Matching loop over an injected per-song lookup.
///
/// Order of the input songs is preserved in the report; lookup errors
/// degrade to unfound entries. Generic so the partial-failure policy can be
/// tested without a network.
pub async fn match_many_with<F, Fut>(artist: &str, songs: &[String], mut lookup: F) -> MatchReport
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Res<Option<String>>>,
{
    let mut report = MatchReport::default();

    for song in songs {
        let uri = match lookup(song.clone()).await {
            Ok(uri) => uri,
            Err(e) => {
                warning!("Track search failed for \"{}\": {}", song, e);
                None
            }
        };
        report.matches.push(TrackMatch {
            song: song.clone(),
            artist: artist.to_string(),
            uri,
        });
    }

    report
}
