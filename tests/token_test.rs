use chrono::{Duration, Utc};
use setlistify::types::{Token, TokenFlow};

fn token(expires_in: Duration, flow: TokenFlow) -> Token {
    Token {
        value: "BQC-access-token".to_string(),
        expires_at: Utc::now() + expires_in,
        flow,
    }
}

#[test]
fn test_past_expiry_is_expired() {
    let t = token(Duration::minutes(-5), TokenFlow::ClientCredentials);
    assert!(t.is_expired());
}

#[test]
fn test_future_expiry_is_live() {
    let t = token(Duration::minutes(55), TokenFlow::ClientCredentials);
    assert!(!t.is_expired());
}

#[test]
fn test_expiry_boundary_counts_as_expired() {
    let t = token(Duration::zero(), TokenFlow::AuthorizationCode);
    assert!(t.is_expired());
}

#[test]
fn test_flow_kinds_are_distinct() {
    let app = token(Duration::minutes(55), TokenFlow::ClientCredentials);
    let user = token(Duration::minutes(55), TokenFlow::AuthorizationCode);
    assert_ne!(app.flow, user.flow);
}
