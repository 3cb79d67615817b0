//! # API Module
//!
//! HTTP endpoints for the short-lived local server that backs the
//! authorization-code flow.
//!
//! - [`callback`] - receives the redirect from the Spotify consent page and
//!   stores its `code`/`state` query parameters for the waiting auth flow.
//! - [`health`] - liveness probe returning status and version.
//!
//! Built on [Axum](https://docs.rs/axum); the callback shares state with
//! the flow through an `Arc<Mutex<Option<AuthRedirect>>>` extension layer.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
