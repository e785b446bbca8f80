use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
///
/// Deliberately not `Serialize`: the only representation that crosses the
/// wire is [`PublicUser`], which carries no credential material.
#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    /// Globally unique, case-insensitive
    pub username: String,
    /// Globally unique, case-insensitive
    pub email: String,
    /// Argon2id PHC string, set exactly once at registration
    pub password_hash: String,
    /// Ids of the turtles this user owns, in creation order
    pub turtle_ids: Vec<Uuid>,
}

impl User {
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash: String::new(),
            turtle_ids: Vec::new(),
        }
    }
}

/// Boundary representation of a user, without the password hash
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub turtle_ids: Vec<Uuid>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            turtle_ids: user.turtle_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_omits_password_hash() {
        let mut user = User::new("leo".to_string(), "leo@sewer.org".to_string());
        user.password_hash = "$argon2id$secret".to_string();

        let json = serde_json::to_string(&PublicUser::from(&user)).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"username\":\"leo\""));
        assert!(json.contains("turtleIds"));
    }

    #[test]
    fn test_new_user_has_no_turtles() {
        let user = User::new("raph".to_string(), "raph@sewer.org".to_string());

        assert!(user.turtle_ids.is_empty());
        assert!(user.password_hash.is_empty());
    }
}
