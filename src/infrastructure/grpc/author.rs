//! tonic client for the author backend.

use async_trait::async_trait;
use tonic::transport::Channel;

use crate::domain::clients::{AuthorClient, ClientError, ListQuery};
use crate::domain::entities::{Author, AuthorUpdate, NewAuthor};
use crate::infrastructure::grpc::proto::author as pb;
use crate::infrastructure::grpc::unary;

const SERVICE: &str = "author";

/// gRPC implementation of [`AuthorClient`] over the pool's shared channel.
#[derive(Debug, Clone)]
pub struct GrpcAuthorClient {
    channel: Channel,
}

impl GrpcAuthorClient {
    pub(crate) fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl AuthorClient for GrpcAuthorClient {
    async fn create(&self, draft: NewAuthor) -> Result<Author, ClientError> {
        let request = pb::CreateAuthorReq {
            fullname: draft.fullname,
        };

        let created: pb::Author = unary(
            &self.channel,
            SERVICE,
            "/author.AuthorServices/AddAuthor",
            request,
        )
        .await?;

        Ok(created.into())
    }

    async fn fetch(&self, id: &str) -> Result<Author, ClientError> {
        let request = pb::Id { id: id.to_owned() };

        let found: pb::Author = unary(
            &self.channel,
            SERVICE,
            "/author.AuthorServices/GetAuthorByID",
            request,
        )
        .await?;

        Ok(found.into())
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<Author>, ClientError> {
        let request = pb::GetAuthorListReq {
            offset: query.offset,
            limit: query.limit,
            search: query.search,
        };

        let page: pb::GetAuthorListRes = unary(
            &self.channel,
            SERVICE,
            "/author.AuthorServices/GetAuthorList",
            request,
        )
        .await?;

        Ok(page.authors.into_iter().map(Author::from).collect())
    }

    async fn update(&self, change: AuthorUpdate) -> Result<Author, ClientError> {
        let request = pb::UpdateAuthorReq {
            id: change.id,
            fullname: change.fullname,
        };

        let updated: pb::Author = unary(
            &self.channel,
            SERVICE,
            "/author.AuthorServices/UpdateAuthor",
            request,
        )
        .await?;

        Ok(updated.into())
    }

    async fn delete(&self, id: &str) -> Result<Author, ClientError> {
        let request = pb::Id { id: id.to_owned() };

        let deleted: pb::Author = unary(
            &self.channel,
            SERVICE,
            "/author.AuthorServices/DeleteAuthor",
            request,
        )
        .await?;

        Ok(deleted.into())
    }
}

impl From<pb::Author> for Author {
    fn from(author: pb::Author) -> Self {
        Author {
            id: author.id,
            fullname: author.fullname,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}
