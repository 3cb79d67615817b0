//! # Spotify Integration Module
//!
//! Client layer for the Spotify Web API and its auth server, covering the
//! streaming-service half of the pipeline.
//!
//! ## Submodules
//!
//! - [`auth`] - both OAuth 2.0 grants against the token endpoint: the
//!   client-credentials exchange used for catalog search, and the
//!   authorization-code exchange (consent URL, local redirect capture,
//!   code-for-token swap, refresh) used for anything that touches the
//!   user's account.
//! - [`tracks`] - song matching: free-text catalog search that records the
//!   best-match track URI per performed song and aggregates a per-setlist
//!   report with a missing count.
//! - [`playlist`] - playlist publishing: resolves the authenticated user,
//!   creates the playlist, and appends the matched tracks in one batch.
//!
//! ## Authentication strategy
//!
//! Credentials are the application's client id/secret pair, sent as a Basic
//! credential (`base64(client_id:client_secret)`) on every token request.
//! Token lifecycles live in [`crate::management::TokenManager`]; functions
//! here perform single exchanges and never store state.
//!
//! ## Failure policy
//!
//! Song matching degrades: a search failure or an empty result marks that
//! one song as unfound and the batch continues, so one missing song can
//! never sink the playlist. Token exchanges and playlist creation are the
//! opposite: they abort their operation outright, because nothing useful
//! exists past a failed exchange or a playlist that was never created.

pub mod auth;
pub mod playlist;
pub mod tracks;
