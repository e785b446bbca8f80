use crate::models::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

pub async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Unknown endpoint. Valid endpoints: /api/register, /api/login, \
                    /api/logout, /api/turtles, /api/turtles/mine, /health"
                .to_string(),
        }),
    )
        .into_response()
}
