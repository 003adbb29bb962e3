//! Article resource: dispatch binding and policy.

use async_trait::async_trait;

use crate::api::dispatch::Resource;
use crate::api::dto::article::{CreateArticleRequest, UpdateArticleRequest};
use crate::api::policy::{UpstreamPolicy, ARTICLE_POLICY};
use crate::domain::clients::{ClientError, ListQuery};
use crate::domain::entities::Article;
use crate::state::AppState;

pub struct Articles;

#[async_trait]
impl Resource for Articles {
    const NAME: &'static str = "Article";
    const POLICY: UpstreamPolicy = ARTICLE_POLICY;

    type CreateBody = CreateArticleRequest;
    type UpdateBody = UpdateArticleRequest;
    type Entity = Article;

    fn entity_id(entity: &Article) -> &str {
        &entity.id
    }

    async fn create(state: &AppState, body: CreateArticleRequest) -> Result<Article, ClientError> {
        state.articles.create(body.into()).await
    }

    async fn fetch(state: &AppState, id: &str) -> Result<Article, ClientError> {
        state.articles.fetch(id).await
    }

    async fn list(state: &AppState, query: ListQuery) -> Result<Vec<Article>, ClientError> {
        state.articles.list(query).await
    }

    async fn update(state: &AppState, body: UpdateArticleRequest) -> Result<Article, ClientError> {
        state.articles.update(body.into()).await
    }

    async fn delete(state: &AppState, id: &str) -> Result<Article, ClientError> {
        state.articles.delete(id).await
    }
}
