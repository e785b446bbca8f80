// Application state (AppState)

use crate::core::config::Config;
use crate::stores::{
    session_store::SessionStore, turtle_store::TurtleStore, user_store::UserStore,
};
use std::sync::Arc;

/// Shared application state
///
/// Contains all shared components that are accessed by request handlers.
/// All fields are wrapped in Arc for efficient cloning across threads.
#[derive(Clone)]
pub struct AppState {
    /// Registered user accounts
    pub users: Arc<UserStore>,

    /// Turtle records and their owners
    pub turtles: Arc<TurtleStore>,

    /// Active login sessions
    pub sessions: Arc<SessionStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            turtles: Arc::new(TurtleStore::new()),
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }
}
