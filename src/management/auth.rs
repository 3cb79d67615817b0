use std::future::Future;

use tokio::sync::Mutex;

use crate::{
    error::AuthError,
    spotify,
    types::{AuthRedirect, Token, TokenFlow},
    utils,
};

#[derive(Default)]
struct TokenState {
    token: Option<Token>,
    // Kept off the token itself; only the authorization-code grant has one.
    refresh_token: Option<String>,
}

/// Owns the single live Spotify token and both ways of obtaining one.
///
/// All access goes through an async mutex held across the exchange, so a
/// second caller arriving mid-refresh waits for the first exchange instead
/// of racing a duplicate one.
pub struct TokenManager {
    state: Mutex<TokenState>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager {
            state: Mutex::new(TokenState::default()),
        }
    }

    /// Obtains an app-level token via the client-credentials grant.
    ///
    /// Replaces whatever token was live before; a failed exchange leaves no
    /// usable token behind.
    pub async fn acquire_client_credentials(&self) -> Result<Token, AuthError> {
        let mut state = self.state.lock().await;
        let token = spotify::auth::request_client_credentials().await?;
        state.token = Some(token.clone());
        state.refresh_token = None;
        Ok(token)
    }

    /// Obtains a user-level token via the authorization-code grant.
    ///
    /// Builds the consent URL (response type `code`, the configured redirect
    /// target and scopes, a random `state` nonce) and hands it to the
    /// `authorize` collaborator, which must come back with the redirect's
    /// query parameters. The nonce is checked before the code is exchanged.
    pub async fn acquire_authorization_code<F, Fut>(&self, authorize: F) -> Result<Token, AuthError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<AuthRedirect, AuthError>>,
    {
        let mut state = self.state.lock().await;
        let nonce = utils::generate_state_nonce();
        let auth_url = spotify::auth::authorize_url(&nonce);

        let redirect = authorize(auth_url).await?;
        if redirect.state.as_deref() != Some(nonce.as_str()) {
            return Err(AuthError::StateMismatch);
        }

        let (token, refresh) = spotify::auth::exchange_authorization_code(&redirect.code).await?;
        state.token = Some(token.clone());
        state.refresh_token = refresh;
        Ok(token)
    }

    /// Whether user-level tokens can be produced without another trip
    /// through the browser, either from the live token or by renewing
    /// through the stored refresh token.
    ///
    /// The interactive consent flow binds a local callback port, so callers
    /// check this before launching it a second time.
    pub async fn is_user_authorized(&self) -> bool {
        let state = self.state.lock().await;
        state.refresh_token.is_some()
            || state
                .token
                .as_ref()
                .is_some_and(|t| t.flow == TokenFlow::AuthorizationCode && !t.is_expired())
    }

    /// Returns a bearer value for the requested flow, re-acquiring
    /// transparently when the live token is expired or from the other flow.
    ///
    /// Client-credentials tokens are re-exchanged outright. Authorization-code
    /// tokens are renewed through the stored refresh token; without one the
    /// user never authorized in this run and the call fails.
    pub async fn current_token(&self, flow: TokenFlow) -> Result<String, AuthError> {
        let mut state = self.state.lock().await;

        if let Some(token) = &state.token {
            if token.flow == flow && !token.is_expired() {
                return Ok(token.value.clone());
            }
        }

        match flow {
            TokenFlow::ClientCredentials => {
                let token = spotify::auth::request_client_credentials().await?;
                let value = token.value.clone();
                state.token = Some(token);
                Ok(value)
            }
            TokenFlow::AuthorizationCode => {
                let refresh = state
                    .refresh_token
                    .clone()
                    .ok_or(AuthError::NotAuthorized)?;
                let (token, new_refresh) =
                    spotify::auth::refresh_authorization_code(&refresh).await?;
                let value = token.value.clone();
                state.token = Some(token);
                if new_refresh.is_some() {
                    state.refresh_token = new_refresh;
                }
                Ok(value)
            }
        }
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn fresh_manager_is_not_user_authorized() {
        let mgr = TokenManager::new();
        assert!(!mgr.is_user_authorized().await);
    }

    #[tokio::test]
    async fn stored_refresh_token_counts_as_authorized() {
        let mgr = TokenManager::new();
        mgr.state.lock().await.refresh_token = Some("refresh-value".into());
        assert!(mgr.is_user_authorized().await);
    }

    #[tokio::test]
    async fn live_user_token_counts_as_authorized() {
        let mgr = TokenManager::new();
        mgr.state.lock().await.token = Some(Token {
            value: "bearer-value".into(),
            expires_at: Utc::now() + Duration::seconds(60),
            flow: TokenFlow::AuthorizationCode,
        });
        assert!(mgr.is_user_authorized().await);
    }

    #[tokio::test]
    async fn app_level_token_alone_is_not_user_authorization() {
        let mgr = TokenManager::new();
        mgr.state.lock().await.token = Some(Token {
            value: "bearer-value".into(),
            expires_at: Utc::now() + Duration::seconds(60),
            flow: TokenFlow::ClientCredentials,
        });
        assert!(!mgr.is_user_authorized().await);
    }
}
