//! Standalone HTTP request handlers.
//!
//! Resource CRUD goes through [`crate::api::dispatch`]; only the reduced
//! cases live here.

pub mod auth;

pub use auth::login_handler;
