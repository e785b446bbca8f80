// Client session context
//
// The logged-in user snapshot is carried in an explicitly passed context
// value rather than ambient global state. Updates replace the whole
// snapshot, last writer wins.

use crate::models::user::PublicUser;
use uuid::Uuid;

/// What the client remembers about the logged-in user
#[derive(Clone, Debug, PartialEq)]
pub struct UserSnapshot {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&PublicUser> for UserSnapshot {
    fn from(user: &PublicUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    user: Option<UserSnapshot>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserSnapshot> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the whole snapshot, last writer wins
    pub fn replace(&mut self, user: Option<UserSnapshot>) {
        self.user = user;
    }

    /// Forget the user, e.g. after logout
    pub fn clear(&mut self) {
        self.replace(None);
    }
}
