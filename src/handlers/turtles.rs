use crate::auth::session::authenticated_user;
use crate::core::error::TurtleError;
use crate::core::state::AppState;
use crate::models::api::SuccessResponse;
use crate::models::turtle::{Turtle, TurtleFields};
use crate::validation::fields::validate_turtle_fields;
use axum::{
    extract::{Json, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn require_user(state: &AppState, headers: &HeaderMap) -> Result<Uuid, TurtleError> {
    authenticated_user(headers, &state.sessions).ok_or(TurtleError::Unauthenticated)
}

fn trimmed(fields: TurtleFields) -> TurtleFields {
    TurtleFields {
        name: fields.name.trim().to_string(),
        weapon: fields.weapon.trim().to_string(),
        headband_color: fields.headband_color.trim().to_string(),
    }
}

/// The caller's own turtles, in creation order
///
/// GET /api/turtles/mine (Authorization: Bearer <token>)
pub async fn list_mine_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, TurtleError> {
    let user_id = require_user(&state, &headers)?;

    let user = state.users.get(user_id).ok_or(TurtleError::Unauthenticated)?;
    let turtles = state.turtles.select(&user.turtle_ids);

    Ok((StatusCode::OK, Json(turtles)).into_response())
}

/// Every turtle regardless of owner, for public browsing
///
/// GET /api/turtles
pub async fn list_all_handler(State(state): State<Arc<AppState>>) -> Response {
    (StatusCode::OK, Json(state.turtles.list_all())).into_response()
}

/// Create a turtle owned by the caller
///
/// POST /api/turtles { name, weapon, headbandColor }
pub async fn add_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(fields): Json<TurtleFields>,
) -> Result<Response, TurtleError> {
    let user_id = require_user(&state, &headers)?;

    validate_turtle_fields(&fields)?;

    let turtle = Turtle::new(user_id, trimmed(fields));

    // Turtle first, back-reference second; readers filter dangling ids
    state.turtles.insert(turtle.clone());
    state.users.append_turtle_id(user_id, turtle.id);

    info!(turtle_id = %turtle.id, owner_id = %user_id, name = %turtle.name, "Turtle added");

    Ok((StatusCode::OK, Json(turtle)).into_response())
}

/// Overwrite the fields of a turtle the caller owns
///
/// PUT /api/turtles/{id} { name, weapon, headbandColor }
pub async fn edit_handler(
    State(state): State<Arc<AppState>>,
    Path(turtle_id): Path<Uuid>,
    headers: HeaderMap,
    Json(fields): Json<TurtleFields>,
) -> Result<Response, TurtleError> {
    let user_id = require_user(&state, &headers)?;

    validate_turtle_fields(&fields)?;

    let updated = state
        .turtles
        .update_fields(user_id, turtle_id, trimmed(fields))?;

    info!(turtle_id = %turtle_id, owner_id = %user_id, "Turtle updated");

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// Delete a turtle the caller owns
///
/// DELETE /api/turtles/{id}
pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path(turtle_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Response, TurtleError> {
    let user_id = require_user(&state, &headers)?;

    let removed = state.turtles.remove_owned(user_id, turtle_id)?;
    state.users.remove_turtle_id(user_id, turtle_id);

    info!(turtle_id = %removed.id, owner_id = %user_id, "Turtle deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Turtle deleted".to_string(),
        }),
    )
        .into_response())
}
