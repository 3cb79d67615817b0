//! Setlistify Library
//!
//! This library turns a live concert setlist from the setlist.fm catalog into
//! a Spotify playlist. It resolves a free-text artist name against the
//! setlist.fm database, pages through all matching setlists under optional
//! filters, lets the caller pick one show, matches every performed song
//! against the Spotify catalog, and publishes the result as a playlist under
//! the authenticated user.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Typed error taxonomy for both API integrations
//! - `management` - Token lifecycle management for the two OAuth flows
//! - `server` - Local HTTP server for the authorization redirect
//! - `setlistfm` - setlist.fm API client (artists, setlists, selection)
//! - `spotify` - Spotify Web API client (auth, track search, playlists)
//! - `types` - Data structures and type definitions
//! - `utils` - Prompt helpers, request pacing, and nonce generation

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod setlistfm;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross async task boundaries. Concrete error enums from [`error`] convert
/// into it transparently via `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors where recovery is not possible; code after this
/// macro will not execute.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
