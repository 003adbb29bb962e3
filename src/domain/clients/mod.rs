//! Backend client traits — the seam between the dispatch layer and the
//! gRPC transport.
//!
//! One trait per backend service, mirroring that service's RPC surface
//! one-to-one. Implementations live in [`crate::infrastructure::grpc`];
//! test doubles implement the same traits.
//!
//! Every method is a single RPC with no retry: a failure is terminal for the
//! inbound request that triggered it, and how it maps to an HTTP status is
//! the caller's decision (see [`crate::api::policy`]), not the client's.

pub mod article_client;
pub mod auth_client;
pub mod author_client;

pub use article_client::ArticleClient;
pub use auth_client::AuthClient;
pub use author_client::AuthorClient;

/// Resolved list parameters forwarded to a backend's list RPC.
///
/// Values are forwarded exactly as resolved — the gateway enforces no upper
/// bound on `limit` and does not reject negative values that parsed as
/// integers; range handling belongs to the backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: i64,
    pub limit: i64,
    pub search: String,
}

/// Error reported by a backend call.
///
/// Carries the upstream error text verbatim; status-code selection happens
/// at the dispatch boundary.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    message: String,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        Self::new(status.message())
    }
}
