// Add-turtle form with the client-side empty-field guard
//
// The guard only saves a round trip for obviously incomplete submissions;
// the server still validates every field on its own.

use crate::models::turtle::{Turtle, TurtleFields};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurtleForm {
    pub fields: TurtleFields,
}

impl TurtleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three fields filled in?
    pub fn is_complete(&self) -> bool {
        !self.fields.name.trim().is_empty()
            && !self.fields.weapon.trim().is_empty()
            && !self.fields.headband_color.trim().is_empty()
    }

    /// Submit the form through the transport
    ///
    /// An incomplete form never reaches the transport and returns Ok(None).
    /// On success the form resets to blank; on failure the typed values
    /// stay in place so the user can retry.
    pub fn submit<T, E>(&mut self, transport: T) -> Result<Option<Turtle>, E>
    where
        T: FnOnce(&TurtleFields) -> Result<Turtle, E>,
    {
        if !self.is_complete() {
            return Ok(None);
        }

        let created = transport(&self.fields)?;

        self.fields = TurtleFields::default();

        Ok(Some(created))
    }
}
