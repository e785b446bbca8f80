use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A turtle record owned by exactly one user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turtle {
    pub id: Uuid,
    pub name: String,
    pub weapon: String,
    pub headband_color: String,
    /// Fixed at creation, never reassigned
    pub owner_id: Uuid,
}

/// The three user-editable fields of a turtle
///
/// Doubles as the request body for the add and edit endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurtleFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weapon: String,
    #[serde(default)]
    pub headband_color: String,
}

impl Turtle {
    pub fn new(owner_id: Uuid, fields: TurtleFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            weapon: fields.weapon,
            headband_color: fields.headband_color,
            owner_id,
        }
    }

    /// Overwrite the mutable fields, leaving id and owner untouched
    pub fn apply(&mut self, fields: TurtleFields) {
        self.name = fields.name;
        self.weapon = fields.weapon;
        self.headband_color = fields.headband_color;
    }
}
