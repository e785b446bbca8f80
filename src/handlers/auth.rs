use crate::auth::password::{store_password, verify_password};
use crate::auth::session::bearer_token;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::{LoginRequest, LoginResponse, RegisterRequest, SuccessResponse};
use crate::models::user::{PublicUser, User};
use crate::validation::fields::{validate_email, validate_password, validate_username};
use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Create a new account
///
/// POST /api/register { username, email, password }
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, AuthError> {
    validate_username(&request.username, state.config.auth.min_username_length)?;
    validate_email(&request.email)?;
    validate_password(&request.password, state.config.auth.min_password_length)?;

    let mut user = User::new(
        request.username.trim().to_string(),
        request.email.trim().to_string(),
    );

    // New record, so the plaintext is hashed exactly once
    store_password(&mut user, &request.password, true)?;

    let user = state.users.insert(user)?;

    info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((StatusCode::OK, Json(PublicUser::from(&user))).into_response())
}

/// Log in with username or email
///
/// POST /api/login { identity, password }
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    let Some(user) = state.users.find_by_identity(request.identity.trim()) else {
        warn!(identity = %request.identity, "Login attempt for unknown identity");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(&request.password, &user.password_hash) {
        warn!(user_id = %user.id, "Login attempt with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let token = state.sessions.create(user.id);

    info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token,
            user: PublicUser::from(&user),
        }),
    )
        .into_response())
}

/// Revoke the caller's session
///
/// POST /api/logout (Authorization: Bearer <token>)
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AuthError> {
    let token = bearer_token(&headers).ok_or(AuthError::Unauthenticated)?;

    if !state.sessions.revoke(token) {
        return Err(AuthError::Unauthenticated);
    }

    info!("User logged out");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}
