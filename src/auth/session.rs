use crate::stores::session_store::SessionStore;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use uuid::Uuid;

/// Extract the bearer token from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the caller's session token to a user id
pub fn authenticated_user(headers: &HeaderMap, sessions: &SessionStore) -> Option<Uuid> {
    let token = bearer_token(headers)?;

    sessions.resolve(token)
}
