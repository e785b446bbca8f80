use crate::core::error::AuthError;
use crate::models::user::User;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

/// In-memory store for registered accounts
///
/// Username and email uniqueness is enforced through two reservation maps
/// keyed by the lowercased value. A registration claims the username slot
/// first, then the email slot; if the email is already taken the username
/// reservation is rolled back so no partial account remains.
pub struct UserStore {
    users: DashMap<Uuid, User>,
    by_username: DashMap<String, Uuid>,
    by_email: DashMap<String, Uuid>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            by_username: DashMap::new(),
            by_email: DashMap::new(),
        }
    }

    /// Persist a new account, enforcing username and email uniqueness
    pub fn insert(&self, user: User) -> Result<User, AuthError> {
        let username_key = user.username.to_lowercase();
        let email_key = user.email.to_lowercase();

        match self.by_username.entry(username_key.clone()) {
            Entry::Occupied(_) => return Err(AuthError::UsernameTaken),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }

        match self.by_email.entry(email_key) {
            Entry::Occupied(_) => {
                self.by_username.remove(&username_key);
                return Err(AuthError::EmailTaken);
            }
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }

        self.users.insert(user.id, user.clone());

        Ok(user)
    }

    /// Look up an account by username or email (case-insensitive)
    pub fn find_by_identity(&self, identity: &str) -> Option<User> {
        let key = identity.to_lowercase();

        let id = self
            .by_username
            .get(&key)
            .or_else(|| self.by_email.get(&key))
            .map(|entry| *entry.value())?;

        self.get(id)
    }

    /// Get an account by id
    /// Returns a clone of the user if found
    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    /// Record a newly created turtle on its owner's reference list
    pub fn append_turtle_id(&self, user_id: Uuid, turtle_id: Uuid) {
        if let Some(mut entry) = self.users.get_mut(&user_id) {
            entry.turtle_ids.push(turtle_id);
        }
    }

    /// Drop a deleted turtle from its owner's reference list
    pub fn remove_turtle_id(&self, user_id: Uuid, turtle_id: Uuid) {
        if let Some(mut entry) = self.users.get_mut(&user_id) {
            entry.turtle_ids.retain(|id| *id != turtle_id);
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, email: &str) -> User {
        User::new(username.to_string(), email.to_string())
    }

    #[test]
    fn test_insert_and_find() {
        let store = UserStore::new();
        let user = store.insert(account("leo", "leo@sewer.org")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(user.id).unwrap().username, "leo");
        assert_eq!(store.find_by_identity("leo").unwrap().id, user.id);
        assert_eq!(store.find_by_identity("leo@sewer.org").unwrap().id, user.id);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let store = UserStore::new();
        store.insert(account("leo", "leo@sewer.org")).unwrap();

        let result = store.insert(account("Leo", "other@sewer.org"));

        assert!(matches!(result, Err(AuthError::UsernameTaken)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected_and_rolled_back() {
        let store = UserStore::new();
        store.insert(account("leo", "leo@sewer.org")).unwrap();

        let result = store.insert(account("mikey", "LEO@sewer.org"));
        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(store.len(), 1);

        // The username reservation must not linger after the failed insert
        let retry = store.insert(account("mikey", "mikey@sewer.org"));
        assert!(retry.is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_unknown_identity() {
        let store = UserStore::new();

        assert!(store.find_by_identity("splinter").is_none());
    }

    #[test]
    fn test_turtle_reference_lifecycle() {
        let store = UserStore::new();
        let user = store.insert(account("leo", "leo@sewer.org")).unwrap();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        store.append_turtle_id(user.id, first);
        store.append_turtle_id(user.id, second);
        assert_eq!(store.get(user.id).unwrap().turtle_ids, vec![first, second]);

        store.remove_turtle_id(user.id, first);
        assert_eq!(store.get(user.id).unwrap().turtle_ids, vec![second]);
    }
}
