pub mod core;
pub mod models;
pub mod stores;
pub mod auth;
pub mod client;
pub mod validation;
pub mod utils;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;
