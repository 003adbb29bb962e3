//! Data Transfer Objects for request/response serialization.

pub mod article;
pub mod auth;
pub mod author;
pub mod envelope;
pub mod pagination;
