use reqwest::Client;

use crate::{
    config,
    error::PublishError,
    management::TokenManager,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        Playlist, TokenFlow, UserProfile,
    },
};

/// Everything the publish step produced.
///
/// When population fails after the playlist was already created, the empty
/// playlist is still returned with the failure attached: "created but not
/// populated" is an observable state the caller must surface.
#[derive(Debug)]
pub struct PublishOutcome {
    pub playlist: Playlist,
    pub populate_error: Option<PublishError>,
}

/// Creates a playlist under the authenticated user and fills it.
///
/// Resolves the user's identity from the current bearer token, creates an
/// empty public playlist with the given name and description, then appends
/// all track URIs in one batch call. Creation failure aborts before any
/// population attempt.
pub async fn publish(
    token_mgr: &TokenManager,
    name: &str,
    description: &str,
    track_uris: &[String],
) -> Result<PublishOutcome, PublishError> {
    let token = token_mgr.current_token(TokenFlow::AuthorizationCode).await?;
    let client = Client::new();

    let user = client
        .get(format!("{}/me", config::spotify_apiurl()))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json::<UserProfile>()
        .await?;

    let response = client
        .post(format!(
            "{}/users/{}/playlists",
            config::spotify_apiurl(),
            user.id
        ))
        .bearer_auth(&token)
        .json(&CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: true,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(PublishError::Status(response.status()));
    }
    let created = response.json::<CreatePlaylistResponse>().await?;

    let mut playlist = Playlist {
        id: created.id,
        name: created.name,
        description: created.description.unwrap_or_else(|| description.to_string()),
        track_uris: Vec::new(),
    };

    match add_tracks(&client, &token, &playlist.id, track_uris).await {
        Ok(()) => {
            playlist.track_uris = track_uris.to_vec();
            Ok(PublishOutcome {
                playlist,
                populate_error: None,
            })
        }
        Err(e) => Ok(PublishOutcome {
            playlist,
            populate_error: Some(e),
        }),
    }
}

async fn add_tracks(
    client: &Client,
    token: &str,
    playlist_id: &str,
    track_uris: &[String],
) -> Result<(), PublishError> {
    if track_uris.is_empty() {
        return Ok(());
    }

    let response = client
        .post(format!(
            "{}/playlists/{}/tracks",
            config::spotify_apiurl(),
            playlist_id
        ))
        .bearer_auth(token)
        .json(&AddTracksRequest {
            uris: track_uris.to_vec(),
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(PublishError::Status(response.status()));
    }

    response.json::<AddTracksResponse>().await?;
    Ok(())
}
