//! Configuration management for setlistify.
//!
//! Handles loading and accessing configuration values from environment
//! variables and a `.env` file in the platform-specific local data directory
//! (`setlistify/.env`). Environment variables take priority over the file.
//!
//! Two credential sets are required: the setlist.fm API key and the Spotify
//! application's client id/secret pair, plus the Spotify endpoint URLs and
//! the redirect target registered for the application.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `setlistify/.env` under the platform's local data dir:
/// - Linux: `~/.local/share/setlistify/.env`
/// - macOS: `~/Library/Application Support/setlistify/.env`
/// - Windows: `%LOCALAPPDATA%/setlistify/.env`
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("setlistify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).expect("Failed to load .env file");
    Ok(())
}

/// Returns the bind address for the local OAuth callback server.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the setlist.fm API key sent as the `x-api-key` header.
///
/// # Panics
///
/// Panics if the `SETLISTFM_API_KEY` environment variable is not set.
pub fn setlistfm_api_key() -> String {
    env::var("SETLISTFM_API_KEY").expect("SETLISTFM_API_KEY must be set")
}

/// Returns the setlist.fm REST API base URL.
///
/// # Panics
///
/// Panics if the `SETLISTFM_API_URL` environment variable is not set.
pub fn setlistfm_apiurl() -> String {
    env::var("SETLISTFM_API_URL").expect("SETLISTFM_API_URL must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// The secret should be kept confidential and never exposed in logs or
/// version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Must match the redirect URI registered in the Spotify application
/// settings, and its host/port must agree with [`server_addr`].
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify OAuth scope string requested during user authorization.
///
/// Playlist publishing needs `playlist-modify-public playlist-modify-private`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}
