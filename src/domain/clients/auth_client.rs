//! Client trait for the authorization backend service.

use async_trait::async_trait;

use crate::domain::clients::ClientError;
use crate::domain::entities::{AccessToken, Credentials};

/// Typed stub over the authorization service's RPC surface.
///
/// The gateway never parses or validates tokens itself; both operations
/// delegate entirely to the backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::grpc::GrpcAuthClient`] - tonic transport
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Exchanges credentials for a token.
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, ClientError>;

    /// Asks the backend whether the presented token grants access.
    async fn verify(&self, token: &str) -> Result<(), ClientError>;
}
