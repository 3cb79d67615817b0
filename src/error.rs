//! Error taxonomy for the two API integrations.
//!
//! Read failures (artist search, setlist pages, track search) are retryable
//! and are never conflated with "no data": an empty search result is an
//! ordinary outcome, not an error. Token exchanges and playlist creation
//! fail outright since no meaningful partial state exists for them.

use reqwest::StatusCode;
use thiserror::Error;

/// A token exchange with the Spotify auth server failed.
///
/// Fatal to any subsequent authenticated call; a failed exchange never
/// produces a usable token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token endpoint returned {0}")]
    Status(StatusCode),

    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authorization redirect did not carry a code")]
    MissingCode,

    #[error("authorization state nonce did not match")]
    StateMismatch,

    #[error("timed out waiting for the authorization redirect")]
    Timeout,

    #[error("no user authorization available; authorize first")]
    NotAuthorized,
}

/// The artist name search could not be carried out.
///
/// Transport-level only and retryable; a search that succeeds but matches
/// nothing resolves to a not-found outcome instead.
#[derive(Debug, Error)]
#[error("artist search failed: {0}")]
pub struct ResolveError(#[from] pub reqwest::Error);

/// One page of the setlist search could not be fetched.
///
/// Pages already fetched remain usable; whether partial results are
/// acceptable is the caller's decision.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("setlist page {page} request failed: {source}")]
    Http {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("setlist page {page} returned {status}")]
    Status { page: u32, status: StatusCode },
}

/// A 1-based choice index fell outside the candidate list.
#[derive(Debug, Error)]
#[error("choice {index} is out of range (1-{len})")]
pub struct SelectionError {
    pub index: usize,
    pub len: usize,
}

/// Playlist creation or population failed.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("could not authenticate for publishing: {0}")]
    Auth(#[from] AuthError),

    #[error("playlist request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("playlist endpoint returned {0}")]
    Status(StatusCode),
}
