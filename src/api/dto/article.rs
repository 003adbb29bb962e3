//! Article request bodies.
//!
//! Bodies are checked for shape only — field presence and JSON
//! well-formedness. Domain rules (does the author exist, is the title
//! sensible) belong to the article backend.

use serde::Deserialize;

use crate::domain::entities::{ArticleUpdate, NewArticle};

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub author_id: String,
    pub title: String,
    pub body: String,
}

impl From<CreateArticleRequest> for NewArticle {
    fn from(body: CreateArticleRequest) -> Self {
        NewArticle {
            author_id: body.author_id,
            title: body.title,
            body: body.body,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl From<UpdateArticleRequest> for ArticleUpdate {
    fn from(body: UpdateArticleRequest) -> Self {
        ArticleUpdate {
            id: body.id,
            title: body.title,
            body: body.body,
        }
    }
}
