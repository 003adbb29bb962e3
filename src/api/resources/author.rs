//! Author resource: dispatch binding and policy.

use async_trait::async_trait;

use crate::api::dispatch::Resource;
use crate::api::dto::author::{CreateAuthorRequest, UpdateAuthorRequest};
use crate::api::policy::{UpstreamPolicy, AUTHOR_POLICY};
use crate::domain::clients::{ClientError, ListQuery};
use crate::domain::entities::Author;
use crate::state::AppState;

pub struct Authors;

#[async_trait]
impl Resource for Authors {
    const NAME: &'static str = "Author";
    const POLICY: UpstreamPolicy = AUTHOR_POLICY;

    type CreateBody = CreateAuthorRequest;
    type UpdateBody = UpdateAuthorRequest;
    type Entity = Author;

    fn entity_id(entity: &Author) -> &str {
        &entity.id
    }

    async fn create(state: &AppState, body: CreateAuthorRequest) -> Result<Author, ClientError> {
        state.authors.create(body.into()).await
    }

    async fn fetch(state: &AppState, id: &str) -> Result<Author, ClientError> {
        state.authors.fetch(id).await
    }

    async fn list(state: &AppState, query: ListQuery) -> Result<Vec<Author>, ClientError> {
        state.authors.list(query).await
    }

    async fn update(state: &AppState, body: UpdateAuthorRequest) -> Result<Author, ClientError> {
        state.authors.update(body.into()).await
    }

    async fn delete(state: &AppState, id: &str) -> Result<Author, ClientError> {
        state.authors.delete(id).await
    }
}
