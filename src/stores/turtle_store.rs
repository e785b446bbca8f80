use crate::core::error::TurtleError;
use crate::models::turtle::{Turtle, TurtleFields};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

/// In-memory store for turtle records
///
/// Mutations go through the entry API so the ownership check and the write
/// happen under the same shard lock: a concurrent edit and delete on one id
/// serialize, neither can observe a half-applied record.
pub struct TurtleStore {
    turtles: DashMap<Uuid, Turtle>,
}

impl TurtleStore {
    pub fn new() -> Self {
        Self {
            turtles: DashMap::new(),
        }
    }

    /// Add a turtle to the store
    pub fn insert(&self, turtle: Turtle) {
        self.turtles.insert(turtle.id, turtle);
    }

    /// Get a turtle by id
    /// Returns a clone of the turtle if found
    pub fn get(&self, id: Uuid) -> Option<Turtle> {
        self.turtles.get(&id).map(|entry| entry.value().clone())
    }

    /// All turtles owned by the given user
    pub fn list_owned(&self, owner_id: Uuid) -> Vec<Turtle> {
        self.turtles
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Every turtle regardless of owner, for public browsing
    pub fn list_all(&self) -> Vec<Turtle> {
        self.turtles
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Resolve a list of ids in order, skipping any that no longer exist
    ///
    /// Dangling ids can appear briefly between a turtle removal and the
    /// owner's reference-list update; readers tolerate them by filtering.
    pub fn select(&self, ids: &[Uuid]) -> Vec<Turtle> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    /// Overwrite the mutable fields of a turtle owned by `user_id`
    pub fn update_fields(
        &self,
        user_id: Uuid,
        turtle_id: Uuid,
        fields: TurtleFields,
    ) -> Result<Turtle, TurtleError> {
        match self.turtles.entry(turtle_id) {
            Entry::Occupied(mut entry) => {
                if entry.get().owner_id != user_id {
                    return Err(TurtleError::NotOwner);
                }

                entry.get_mut().apply(fields);

                Ok(entry.get().clone())
            }
            Entry::Vacant(_) => Err(TurtleError::NotFound(turtle_id)),
        }
    }

    /// Remove a turtle owned by `user_id`, returning the removed record
    pub fn remove_owned(&self, user_id: Uuid, turtle_id: Uuid) -> Result<Turtle, TurtleError> {
        match self.turtles.entry(turtle_id) {
            Entry::Occupied(entry) => {
                if entry.get().owner_id != user_id {
                    return Err(TurtleError::NotOwner);
                }

                Ok(entry.remove())
            }
            Entry::Vacant(_) => Err(TurtleError::NotFound(turtle_id)),
        }
    }

    pub fn len(&self) -> usize {
        self.turtles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turtles.is_empty()
    }
}

impl Default for TurtleStore {
    fn default() -> Self {
        Self::new()
    }
}
