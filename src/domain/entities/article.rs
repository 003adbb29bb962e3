//! Article entity and its request value objects.

use serde::Serialize;

use crate::domain::entities::Author;

/// An article as returned to API callers.
///
/// `author` is only populated on reads that go through the article backend's
/// by-id lookup, which joins the author in; mutations return the bare record.
/// Timestamps are opaque strings supplied by the backend and passed through.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields required to create an article. Constructed from the request body,
/// consumed by one RPC, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author_id: String,
    pub title: String,
    pub body: String,
}

/// Identifier plus the mutable article fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleUpdate {
    pub id: String,
    pub title: String,
    pub body: String,
}
