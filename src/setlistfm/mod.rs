//! # setlist.fm Integration Module
//!
//! Client layer for the setlist.fm REST API, covering everything needed to
//! go from a free-text artist name to one chosen setlist:
//!
//! - [`artists`] - name search and disambiguation: filters collaboration
//!   ("feat.") credits out of the result list and classifies what remains
//!   into no match, a single match, or a candidate list for the user to
//!   choose from.
//! - [`setlists`] - paginated setlist retrieval under optional filters
//!   (city, state, tour, venue, year), selection of one candidate, and the
//!   playlist title/description formatting derived from it.
//!
//! ## Authentication
//!
//! setlist.fm uses a static API key sent as the `x-api-key` header; there is
//! no token lifecycle on this side. Responses are JSON (`Accept:
//! application/json`).
//!
//! ## Rate limiting
//!
//! The search endpoint returns fixed pages of 20 setlists together with a
//! `total` count. Sequential page fetches are spaced through
//! [`crate::utils::Pacer`] to stay inside the provider's request budget.
//!
//! ## Error handling
//!
//! A search that matches nothing is an ordinary outcome. Transport and HTTP
//! failures surface as [`crate::error::ResolveError`] /
//! [`crate::error::FetchError`] so callers can retry or accept partial
//! results; they are never folded into "not found".

pub mod artists;
pub mod setlists;
