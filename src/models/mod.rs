pub mod api;
pub mod turtle;
pub mod user;
