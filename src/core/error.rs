// Centralized error handling for the turtle service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// Errors from the account endpoints (register, login, logout)
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid field: {0}")]
    Validation(String),

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Invalid username/email or password")]
    InvalidCredentials,

    #[error("Missing or invalid session token")]
    Unauthenticated,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use crate::models::api::ErrorResponse;

        let (status, error_message) = match &self {
            AuthError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::UsernameTaken => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::EmailTaken => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: error_message,
            }),
        )
            .into_response()
    }
}

/// Errors from the turtle endpoints (list, add, edit, delete)
#[derive(Error, Debug)]
pub enum TurtleError {
    #[error("Invalid field: {0}")]
    Validation(String),

    #[error("Missing or invalid session token")]
    Unauthenticated,

    #[error("Only the owner may modify this turtle")]
    NotOwner,

    #[error("No turtle with id {0}")]
    NotFound(Uuid),
}

impl IntoResponse for TurtleError {
    fn into_response(self) -> Response {
        use crate::models::api::ErrorResponse;

        let (status, error_message) = match &self {
            TurtleError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            TurtleError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            TurtleError::NotOwner => (StatusCode::FORBIDDEN, self.to_string()),
            TurtleError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: error_message,
            }),
        )
            .into_response()
    }
}
