use crate::{error, management::TokenManager, spotify, success};

/// Runs the interactive user authorization once and reports the result.
///
/// Tokens live only for the process, so this is primarily a check that the
/// client credentials, redirect URI, and callback server line up.
pub async fn auth() {
    let token_mgr = TokenManager::new();

    match token_mgr
        .acquire_authorization_code(spotify::auth::authorize_via_browser)
        .await
    {
        Ok(_) => success!("Authorization successful!"),
        Err(e) => error!("Authorization failed or timed out: {}", e),
    }
}
