use reqwest::{Client, StatusCode};

use crate::{
    config,
    error::{ResolveError, SelectionError},
    types::{ArtistSearchResponse, SetlistArtist},
};

/// Result of resolving a free-text artist name against the catalog.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// Nothing matched, or every match was a collaboration credit.
    NotFound,
    /// Exactly one usable candidate; resolution is complete.
    Single(SetlistArtist),
    /// Several candidates; the caller must [`pick`] one by 1-based index.
    Multiple(Vec<SetlistArtist>),
}

/// Searches the artist catalog by name, sorted by relevance.
///
/// A 404 from the search endpoint means the catalog has no such artist and
/// maps to [`ResolveOutcome::NotFound`]; any other failure is a transport
/// problem the caller may retry.
pub async fn resolve(name: &str) -> Result<ResolveOutcome, ResolveError> {
    let client = Client::new();
    let response = client
        .get(format!("{}/search/artists", config::setlistfm_apiurl()))
        .query(&[("artistName", name), ("sort", "relevance")])
        .header("x-api-key", config::setlistfm_api_key())
        .header("Accept", "application/json")
        .send()
        .await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(ResolveOutcome::NotFound);
    }

    let response = response.error_for_status()?;
    let res = response.json::<ArtistSearchResponse>().await?;

    Ok(classify_candidates(res.artist))
}

/// Classifies raw search results into a resolution outcome.
///
/// Names carrying a "feat." marker are collaboration credits that would
/// duplicate the primary artist, so they are dropped before counting.
pub fn classify_candidates(found: Vec<SetlistArtist>) -> ResolveOutcome {
    let mut candidates: Vec<SetlistArtist> = found
        .into_iter()
        .filter(|artist| !artist.name.contains("feat."))
        .collect();

    match candidates.len() {
        0 => ResolveOutcome::NotFound,
        1 => ResolveOutcome::Single(candidates.remove(0)),
        _ => ResolveOutcome::Multiple(candidates),
    }
}

/// Picks one candidate by 1-based index from a multi-match outcome.
pub fn pick(candidates: &[SetlistArtist], index: usize) -> Result<SetlistArtist, SelectionError> {
    index
        .checked_sub(1)
        .and_then(|i| candidates.get(i))
        .cloned()
        .ok_or(SelectionError {
            index,
            len: candidates.len(),
        })
}
