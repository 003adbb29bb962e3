//! Entities returned to callers, translated from backend RPC responses.

pub mod article;
pub mod author;
pub mod session;

pub use article::{Article, ArticleUpdate, NewArticle};
pub use author::{Author, AuthorUpdate, NewAuthor};
pub use session::{AccessToken, Credentials};
