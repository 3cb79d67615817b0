use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Which OAuth grant produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFlow {
    ClientCredentials,
    AuthorizationCode,
}

/// A live bearer token for the Spotify Web API.
#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub expires_at: DateTime<Utc>,
    pub flow: TokenFlow,
}

impl Token {
    /// Expiry is derived from the wall clock, never tracked as a separate flag.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Wire shape of the Spotify token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Query parameters captured from the authorization redirect.
#[derive(Debug, Clone)]
pub struct AuthRedirect {
    pub code: String,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub artist: Vec<SetlistArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlistArtist {
    pub mbid: String,
    pub name: String,
    #[serde(default)]
    pub disambiguation: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub num: usize,
    pub name: String,
    pub note: String,
}

/// Caller-supplied constraints for a setlist search. Only the artist name is
/// required; an absent field places no constraint on the query.
#[derive(Debug, Clone, Default)]
pub struct SetlistFilter {
    pub artist_name: String,
    pub city: Option<String>,
    pub state_name: Option<String>,
    pub state_abbr: Option<String>,
    pub tour_name: Option<String>,
    pub venue_name: Option<String>,
    pub year: Option<String>,
}

impl SetlistFilter {
    pub fn new(artist_name: impl Into<String>) -> Self {
        SetlistFilter {
            artist_name: artist_name.into(),
            ..Default::default()
        }
    }

    /// Query pairs for one page request; omitted fields contribute nothing.
    pub fn query_params(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("artistName", self.artist_name.clone())];
        if let Some(city) = &self.city {
            params.push(("cityName", city.clone()));
        }
        if let Some(state) = &self.state_name {
            params.push(("state", state.clone()));
        }
        if let Some(code) = &self.state_abbr {
            params.push(("stateCode", code.clone()));
        }
        if let Some(tour) = &self.tour_name {
            params.push(("tourName", tour.clone()));
        }
        if let Some(venue) = &self.venue_name {
            params.push(("venueName", venue.clone()));
        }
        if let Some(year) = &self.year {
            params.push(("year", year.clone()));
        }
        params.push(("p", page.to_string()));
        params
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetlistSearchResponse {
    #[serde(default)]
    pub setlist: Vec<Setlist>,
    #[serde(default)]
    pub total: u32,
}

/// One documented show as returned by the setlist search. Immutable once
/// fetched; song order inside `sets` is the playback order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setlist {
    pub artist: SetlistArtist,
    pub venue: Venue,
    #[serde(default)]
    pub tour: Option<Tour>,
    #[serde(rename = "eventDate")]
    pub event_date: String,
    pub sets: Sets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: String,
    pub city: City,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
    pub country: Country,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sets {
    #[serde(rename = "set", default)]
    pub sections: Vec<SetSection>,
}

/// One portion of a show: the main set or an encore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub encore: Option<u32>,
    #[serde(default)]
    pub song: Vec<SetlistSong>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlistSong {
    pub name: String,
}

#[derive(Tabled)]
pub struct SetlistTableRow {
    #[tabled(rename = "#")]
    pub num: usize,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub tour: String,
}

/// Outcome of matching one performed song against the Spotify catalog.
/// An unfound song carries no track URI; "found" is derived, not stored.
#[derive(Debug, Clone)]
pub struct TrackMatch {
    pub song: String,
    pub artist: String,
    pub uri: Option<String>,
}

impl TrackMatch {
    pub fn found(&self) -> bool {
        self.uri.is_some()
    }
}

/// Per-setlist aggregate of track matches, in performance order.
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    pub matches: Vec<TrackMatch>,
}

impl MatchReport {
    /// Recomputed on every call so it can never drift from the match list.
    pub fn missing_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.found()).count()
    }

    /// Track URIs of the found songs, preserving performance order.
    pub fn track_uris(&self) -> Vec<String> {
        self.matches.iter().filter_map(|m| m.uri.clone()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSearchResponse {
    #[serde(default)]
    pub tracks: Option<TracksContainer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksContainer {
    #[serde(default)]
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    // The API echoes null here until the description propagates.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

/// A published playlist. Created once, populated once, immutable afterwards
/// as far as this tool is concerned.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub track_uris: Vec<String>,
}
