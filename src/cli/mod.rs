//! # CLI Module
//!
//! User-facing command implementations. The heavy lifting lives in the
//! [`crate::setlistfm`] and [`crate::spotify`] client layers; this module
//! owns the prompts, tables, and progress feedback around them.
//!
//! - [`auth`] - runs the interactive Spotify user authorization on its own,
//!   as a connectivity check for the configured credentials.
//! - [`playlist`] - the full interactive pipeline: resolve the artist,
//!   narrow the setlist search, pick a show, match its songs against the
//!   Spotify catalog, and publish the playlist.
//!
//! Degraded steps always surface a count or reason (`warning!`); only
//! unrecoverable setup failures terminate via `error!`.

mod auth;
mod playlist;

pub use auth::auth;
pub use playlist::playlist;
