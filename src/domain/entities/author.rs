//! Author entity and its request value objects.

use serde::Serialize;

/// An author as returned to API callers.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub id: String,
    pub fullname: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub fullname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorUpdate {
    pub id: String,
    pub fullname: String,
}
