// Edit-state machine for the dashboard turtle list
//
// Display records live here as copies of server-confirmed turtles. Instead
// of a per-record `editing` flag, a single `active_edit` id marks the one
// record in edit mode; every other record is in display mode by definition,
// so the at-most-one-editing invariant holds structurally.

use crate::models::turtle::{Turtle, TurtleFields};
use uuid::Uuid;

/// Unsaved form values for the record currently in edit mode
#[derive(Clone, Debug, PartialEq)]
pub struct EditBuffer {
    pub turtle_id: Uuid,
    pub fields: TurtleFields,
}

/// The client's in-memory list of its own turtles
#[derive(Debug, Default)]
pub struct TurtleList {
    records: Vec<Turtle>,
    active_edit: Option<Uuid>,
    buffer: Option<EditBuffer>,
}

impl TurtleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the list from the server-confirmed set
    ///
    /// Every record comes back in display mode; an edit in progress is
    /// dropped, matching the behavior of the original dashboard.
    pub fn refresh(&mut self, turtles: Vec<Turtle>) {
        self.records = turtles;
        self.active_edit = None;
        self.buffer = None;
    }

    pub fn records(&self) -> &[Turtle] {
        &self.records
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.active_edit
    }

    pub fn is_editing(&self, turtle_id: Uuid) -> bool {
        self.active_edit == Some(turtle_id)
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        self.buffer.as_ref()
    }

    /// Mutable access to the buffer fields, for form input binding
    pub fn buffer_fields_mut(&mut self) -> Option<&mut TurtleFields> {
        self.buffer.as_mut().map(|buffer| &mut buffer.fields)
    }

    /// Put the targeted record in edit mode
    ///
    /// Any other record in edit mode returns to display mode and its
    /// unsaved buffer is discarded. Toggling the record that is already
    /// in edit mode takes it back to display mode.
    ///
    /// Returns false if the id is not in the current list.
    pub fn toggle_edit_mode(&mut self, turtle_id: Uuid) -> bool {
        if self.is_editing(turtle_id) {
            self.cancel_edit_mode();
            return true;
        }

        let Some(record) = self.records.iter().find(|t| t.id == turtle_id) else {
            return false;
        };

        self.buffer = Some(EditBuffer {
            turtle_id,
            fields: TurtleFields {
                name: record.name.clone(),
                weapon: record.weapon.clone(),
                headband_color: record.headband_color.clone(),
            },
        });
        self.active_edit = Some(turtle_id);

        true
    }

    /// Return every record to display mode, discarding the buffer
    pub fn cancel_edit_mode(&mut self) {
        self.active_edit = None;
        self.buffer = None;
    }

    /// Submit the current buffer through the transport
    ///
    /// On success the edited record takes the confirmed values and the list
    /// returns to display mode. On failure the record stays in edit mode
    /// with the buffer intact and the error is handed back to the caller.
    /// With no record in edit mode this is a no-op returning Ok(None).
    pub fn submit_edit<T, E>(&mut self, transport: T) -> Result<Option<Turtle>, E>
    where
        T: FnOnce(Uuid, &TurtleFields) -> Result<Turtle, E>,
    {
        let Some(buffer) = self.buffer.as_ref() else {
            return Ok(None);
        };

        let updated = transport(buffer.turtle_id, &buffer.fields)?;

        if let Some(record) = self.records.iter_mut().find(|t| t.id == updated.id) {
            *record = updated.clone();
        }

        self.active_edit = None;
        self.buffer = None;

        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turtle(name: &str, weapon: &str, color: &str) -> Turtle {
        Turtle::new(
            Uuid::new_v4(),
            TurtleFields {
                name: name.to_string(),
                weapon: weapon.to_string(),
                headband_color: color.to_string(),
            },
        )
    }

    fn three_turtles() -> (TurtleList, Vec<Uuid>) {
        let turtles = vec![
            turtle("Leonardo", "Katana", "Blue"),
            turtle("Raphael", "Sai", "Red"),
            turtle("Donatello", "Bo staff", "Purple"),
        ];
        let ids = turtles.iter().map(|t| t.id).collect();

        let mut list = TurtleList::new();
        list.refresh(turtles);

        (list, ids)
    }

    #[test]
    fn test_records_start_in_display_mode() {
        let (list, ids) = three_turtles();

        assert_eq!(list.editing_id(), None);
        assert!(ids.iter().all(|id| !list.is_editing(*id)));
        assert!(list.buffer().is_none());
    }

    #[test]
    fn test_edit_exclusivity_across_toggles() {
        let (mut list, ids) = three_turtles();

        assert!(list.toggle_edit_mode(ids[0]));
        assert!(list.is_editing(ids[0]));

        // Toggling B takes A back to display mode in the same transition
        assert!(list.toggle_edit_mode(ids[1]));
        assert!(list.is_editing(ids[1]));
        assert!(!list.is_editing(ids[0]));
        assert!(!list.is_editing(ids[2]));
        assert_eq!(list.buffer().unwrap().turtle_id, ids[1]);
    }

    #[test]
    fn test_toggle_same_record_exits_edit_mode() {
        let (mut list, ids) = three_turtles();

        list.toggle_edit_mode(ids[0]);
        list.toggle_edit_mode(ids[0]);

        assert_eq!(list.editing_id(), None);
        assert!(list.buffer().is_none());
    }

    #[test]
    fn test_toggle_unknown_id_is_refused() {
        let (mut list, _) = three_turtles();

        assert!(!list.toggle_edit_mode(Uuid::new_v4()));
        assert_eq!(list.editing_id(), None);
    }

    #[test]
    fn test_buffer_seeded_from_record() {
        let (mut list, ids) = three_turtles();

        list.toggle_edit_mode(ids[0]);

        let buffer = list.buffer().unwrap();
        assert_eq!(buffer.fields.name, "Leonardo");
        assert_eq!(buffer.fields.weapon, "Katana");
        assert_eq!(buffer.fields.headband_color, "Blue");
    }

    #[test]
    fn test_cancel_discards_buffer_and_stale_submit_is_noop() {
        let (mut list, ids) = three_turtles();

        list.toggle_edit_mode(ids[0]);
        list.buffer_fields_mut().unwrap().weapon = "Twin katana".to_string();
        list.cancel_edit_mode();

        assert_eq!(list.editing_id(), None);

        // A submit after cancel must not apply the stale buffer
        let result: Result<Option<Turtle>, ()> =
            list.submit_edit(|_, _| panic!("transport must not be called"));
        assert_eq!(result, Ok(None));
        assert_eq!(list.records()[0].weapon, "Katana");
    }

    #[test]
    fn test_successful_submit_applies_fields_and_exits_edit_mode() {
        let (mut list, ids) = three_turtles();

        list.toggle_edit_mode(ids[0]);
        list.buffer_fields_mut().unwrap().weapon = "Twin katana".to_string();

        let result: Result<Option<Turtle>, ()> = list.submit_edit(|id, fields| {
            let mut confirmed = list_record(ids[0]);
            confirmed.id = id;
            confirmed.apply(fields.clone());
            Ok(confirmed)
        });

        let updated = result.unwrap().unwrap();
        assert_eq!(updated.weapon, "Twin katana");
        assert_eq!(list.records()[0].weapon, "Twin katana");
        assert_eq!(list.editing_id(), None);
        assert!(list.buffer().is_none());
    }

    // Helper building a server-confirmed record with a fixed id
    fn list_record(id: Uuid) -> Turtle {
        let mut t = turtle("Leonardo", "Katana", "Blue");
        t.id = id;
        t
    }

    #[test]
    fn test_failed_submit_preserves_edit_state_and_buffer() {
        let (mut list, ids) = three_turtles();

        list.toggle_edit_mode(ids[0]);
        list.buffer_fields_mut().unwrap().weapon = "Twin katana".to_string();

        let result: Result<Option<Turtle>, &str> = list.submit_edit(|_, _| Err("network down"));

        assert_eq!(result, Err("network down"));
        assert!(list.is_editing(ids[0]));
        assert_eq!(list.buffer().unwrap().fields.weapon, "Twin katana");
        // The displayed record is untouched
        assert_eq!(list.records()[0].weapon, "Katana");
    }

    #[test]
    fn test_refresh_drops_edit_in_progress() {
        let (mut list, ids) = three_turtles();

        list.toggle_edit_mode(ids[0]);
        list.buffer_fields_mut().unwrap().weapon = "Twin katana".to_string();

        list.refresh(vec![turtle("Michelangelo", "Nunchaku", "Orange")]);

        assert_eq!(list.records().len(), 1);
        assert_eq!(list.editing_id(), None);
        assert!(list.buffer().is_none());
    }
}
