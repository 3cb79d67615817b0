use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    error::AuthError,
    server::start_api_server,
    types::{AuthRedirect, Token, TokenFlow, TokenResponse},
    warning,
};

/// Builds the user consent URL for the authorization-code grant.
///
/// Carries the configured redirect target and scopes plus the caller's
/// `state` nonce, which the redirect must echo back.
pub fn authorize_url(state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope(),
        state = state
    )
}

/// Performs the client-credentials exchange.
///
/// POSTs `grant_type=client_credentials` with the Basic credential; the
/// response's `expires_in` becomes an absolute expiry instant.
pub async fn request_client_credentials() -> Result<Token, AuthError> {
    let res = token_request(&[("grant_type", "client_credentials")]).await?;
    Ok(Token {
        value: res.access_token,
        expires_at: Utc::now() + chrono::Duration::seconds(res.expires_in),
        flow: TokenFlow::ClientCredentials,
    })
}

/// Exchanges an authorization code for a user token.
///
/// Returns the token together with the refresh token, which the manager
/// keeps so later renewals need no second trip through the browser.
pub async fn exchange_authorization_code(code: &str) -> Result<(Token, Option<String>), AuthError> {
    let redirect_uri = config::spotify_redirect_uri();
    let res = token_request(&[
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", &redirect_uri),
    ])
    .await?;

    Ok((
        Token {
            value: res.access_token,
            expires_at: Utc::now() + chrono::Duration::seconds(res.expires_in),
            flow: TokenFlow::AuthorizationCode,
        },
        res.refresh_token,
    ))
}

/// Renews an authorization-code token from its refresh token.
pub async fn refresh_authorization_code(
    refresh_token: &str,
) -> Result<(Token, Option<String>), AuthError> {
    let res = token_request(&[
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
    ])
    .await?;

    Ok((
        Token {
            value: res.access_token,
            expires_at: Utc::now() + chrono::Duration::seconds(res.expires_in),
            flow: TokenFlow::AuthorizationCode,
        },
        res.refresh_token,
    ))
}

/// One POST against the token endpoint. A non-2xx answer is an
/// [`AuthError`] and never yields a token.
async fn token_request(form: &[(&str, &str)]) -> Result<TokenResponse, AuthError> {
    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", basic_credential()))
        .form(form)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AuthError::Status(response.status()));
    }

    Ok(response.json::<TokenResponse>().await?)
}

/// `base64(client_id:client_secret)`, the confidential-client credential.
fn basic_credential() -> String {
    STANDARD.encode(format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    ))
}

/// Interactive collaborator for the authorization-code grant.
///
/// Starts the local callback server, opens the consent URL in the default
/// browser (falling back to printing it), and waits for the redirect to
/// arrive. Times out after 60 seconds without a callback.
pub async fn authorize_via_browser(auth_url: String) -> Result<AuthRedirect, AuthError> {
    let shared_state: Arc<Mutex<Option<AuthRedirect>>> = Arc::new(Mutex::new(None));

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    wait_for_redirect(shared_state).await.ok_or(AuthError::Timeout)
}

/// Polls the shared state once a second until the callback handler has
/// stored the redirect, or the 60-second window closes.
async fn wait_for_redirect(
    shared_state: Arc<Mutex<Option<AuthRedirect>>>,
) -> Option<AuthRedirect> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(redirect) = lock.as_ref() {
            return Some(redirect.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
