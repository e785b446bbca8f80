pub mod context;
pub mod edit_state;
pub mod form;
