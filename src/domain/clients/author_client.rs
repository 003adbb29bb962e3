//! Client trait for the author backend service.

use async_trait::async_trait;

use crate::domain::clients::{ClientError, ListQuery};
use crate::domain::entities::{Author, AuthorUpdate, NewAuthor};

/// Typed stub over the author service's RPC surface.
///
/// # Implementations
///
/// - [`crate::infrastructure::grpc::GrpcAuthorClient`] - tonic transport
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorClient: Send + Sync {
    async fn create(&self, draft: NewAuthor) -> Result<Author, ClientError>;

    async fn fetch(&self, id: &str) -> Result<Author, ClientError>;

    async fn list(&self, query: ListQuery) -> Result<Vec<Author>, ClientError>;

    async fn update(&self, change: AuthorUpdate) -> Result<Author, ClientError>;

    async fn delete(&self, id: &str) -> Result<Author, ClientError>;
}
