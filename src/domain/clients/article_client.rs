//! Client trait for the article backend service.

use async_trait::async_trait;

use crate::domain::clients::{ClientError, ListQuery};
use crate::domain::entities::{Article, ArticleUpdate, NewArticle};

/// Typed stub over the article service's RPC surface.
///
/// Safe for unlimited concurrent invocation; implementations hold no
/// per-call state.
///
/// # Implementations
///
/// - [`crate::infrastructure::grpc::GrpcArticleClient`] - tonic transport
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleClient: Send + Sync {
    /// Creates an article. The backend returns the bare record; callers that
    /// want the author joined in follow up with [`Self::fetch`].
    async fn create(&self, draft: NewArticle) -> Result<Article, ClientError>;

    /// Reads one article by id, with its author populated.
    ///
    /// The id is an opaque string; the backend owns format validation.
    async fn fetch(&self, id: &str) -> Result<Article, ClientError>;

    /// Lists articles for the given offset/limit/search window.
    async fn list(&self, query: ListQuery) -> Result<Vec<Article>, ClientError>;

    /// Replaces the mutable fields of an article.
    async fn update(&self, change: ArticleUpdate) -> Result<Article, ClientError>;

    /// Deletes an article, returning the removed record. Deleting an id the
    /// backend no longer knows fails like any other miss.
    async fn delete(&self, id: &str) -> Result<Article, ClientError>;
}
