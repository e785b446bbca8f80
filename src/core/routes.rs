// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Account endpoints
        .route("/api/register", post(crate::handlers::auth::register_handler))
        .route("/api/login", post(crate::handlers::auth::login_handler))
        .route("/api/logout", post(crate::handlers::auth::logout_handler))

        // Turtle endpoints
        .route("/api/turtles", get(crate::handlers::turtles::list_all_handler))
        .route("/api/turtles", post(crate::handlers::turtles::add_handler))
        .route("/api/turtles/mine", get(crate::handlers::turtles::list_mine_handler))
        .route("/api/turtles/{id}", put(crate::handlers::turtles::edit_handler))
        .route("/api/turtles/{id}", delete(crate::handlers::turtles::delete_handler))

        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
