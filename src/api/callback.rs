use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::AuthRedirect;

/// Captures the authorization redirect.
///
/// Only records what arrived; code exchange and state-nonce validation
/// happen in the token manager that is polling the shared state.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthRedirect>>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    *state = Some(AuthRedirect {
        code: code.clone(),
        state: params.get("state").cloned(),
    });

    Html("<h2>Authorization received.</h2><p>You can close this browser window.</p>")
}
