//! gRPC transport: backend connection pool and typed client stubs.
//!
//! One persistent HTTP/2 channel per backend service, dialed eagerly at
//! startup. Channels are cheap to clone and multiplex unlimited concurrent
//! calls, so no locking exists anywhere past [`GrpcBackends::open`].

pub mod proto;

mod article;
mod auth;
mod author;

pub use article::GrpcArticleClient;
pub use auth::GrpcAuthClient;
pub use author::GrpcAuthorClient;

use anyhow::{Context, Result};
use http::uri::PathAndQuery;
use tonic::codec::ProstCodec;
use tonic::transport::{Channel, Endpoint};

use crate::config::{BackendEndpoint, Config};
use crate::domain::clients::ClientError;

/// The full set of backend connections, opened all-or-nothing.
///
/// Either every backend was dialed successfully and the pool exists, or
/// [`GrpcBackends::open`] returned an error and nothing is kept — a
/// partially-opened pool is not a representable state. Channels opened
/// before a failing dial are torn down when they drop with the error.
#[derive(Debug, Clone)]
pub struct GrpcBackends {
    pub articles: GrpcArticleClient,
    pub authors: GrpcAuthorClient,
    pub auth: GrpcAuthClient,
    services: [&'static str; 3],
}

impl GrpcBackends {
    /// Dials every configured backend in a fixed order: author, article,
    /// authorization. The first failure aborts the whole open; the caller
    /// treats that as fatal and must not serve traffic.
    pub async fn open(config: &Config) -> Result<Self> {
        let author = dial(&config.author_backend).await?;
        let article = dial(&config.article_backend).await?;
        let authorization = dial(&config.authorization_backend).await?;

        Ok(Self {
            articles: GrpcArticleClient::new(article),
            authors: GrpcAuthorClient::new(author),
            auth: GrpcAuthClient::new(authorization),
            services: [
                config.author_backend.service,
                config.article_backend.service,
                config.authorization_backend.service,
            ],
        })
    }

    /// Releases the pool's connection handles.
    ///
    /// Dropping a channel handle tears the connection down once the last
    /// clone is gone; teardown is per-connection, so one connection's
    /// failure cannot block the others. Safe to call on connections that
    /// were never used.
    pub fn close(self) {
        for service in self.services {
            tracing::info!(service, "backend connection released");
        }
    }
}

/// Eagerly establishes one channel to a backend.
async fn dial(endpoint: &BackendEndpoint) -> Result<Channel> {
    let uri = endpoint.uri();

    let channel = Endpoint::from_shared(uri.clone())
        .with_context(|| format!("invalid {} backend address '{uri}'", endpoint.service))?
        .connect()
        .await
        .with_context(|| format!("failed to dial {} backend at {uri}", endpoint.service))?;

    tracing::info!(service = endpoint.service, %uri, "backend connection established");
    Ok(channel)
}

/// Issues one unary call on a cloned handle of the shared channel.
///
/// Dropping the returned future (the inbound HTTP request went away)
/// cancels the in-flight RPC.
pub(crate) async fn unary<Req, Res>(
    channel: &Channel,
    service: &'static str,
    path: &'static str,
    request: Req,
) -> Result<Res, ClientError>
where
    Req: prost::Message + 'static,
    Res: prost::Message + Default + 'static,
{
    let mut grpc = tonic::client::Grpc::new(channel.clone());

    grpc.ready()
        .await
        .map_err(|e| ClientError::new(format!("{service} backend not ready: {e}")))?;

    let codec: ProstCodec<Req, Res> = ProstCodec::default();
    let response = grpc
        .unary(
            tonic::Request::new(request),
            PathAndQuery::from_static(path),
            codec,
        )
        .await?;

    Ok(response.into_inner())
}
