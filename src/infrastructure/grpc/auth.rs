//! tonic client for the authorization backend.

use async_trait::async_trait;
use tonic::transport::Channel;

use crate::domain::clients::{AuthClient, ClientError};
use crate::domain::entities::{AccessToken, Credentials};
use crate::infrastructure::grpc::proto::authorization as pb;
use crate::infrastructure::grpc::unary;

const SERVICE: &str = "authorization";

/// gRPC implementation of [`AuthClient`] over the pool's shared channel.
#[derive(Debug, Clone)]
pub struct GrpcAuthClient {
    channel: Channel,
}

impl GrpcAuthClient {
    pub(crate) fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl AuthClient for GrpcAuthClient {
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, ClientError> {
        let request = pb::LoginReq {
            username: credentials.username,
            password: credentials.password,
        };

        let session: pb::LoginRes = unary(
            &self.channel,
            SERVICE,
            "/authorization.AuthService/Login",
            request,
        )
        .await?;

        Ok(AccessToken {
            token: session.token,
        })
    }

    async fn verify(&self, token: &str) -> Result<(), ClientError> {
        let request = pb::HasAccessReq {
            token: token.to_owned(),
        };

        let verdict: pb::HasAccessRes = unary(
            &self.channel,
            SERVICE,
            "/authorization.AuthService/HasAccess",
            request,
        )
        .await?;

        if verdict.has_access {
            Ok(())
        } else {
            Err(ClientError::new("token rejected"))
        }
    }
}
