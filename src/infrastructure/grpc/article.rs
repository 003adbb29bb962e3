//! tonic client for the article backend.

use async_trait::async_trait;
use tonic::transport::Channel;

use crate::domain::clients::{ArticleClient, ClientError, ListQuery};
use crate::domain::entities::{Article, ArticleUpdate, Author, NewArticle};
use crate::infrastructure::grpc::proto::article as pb;
use crate::infrastructure::grpc::unary;

const SERVICE: &str = "article";

/// gRPC implementation of [`ArticleClient`] over the pool's shared channel.
#[derive(Debug, Clone)]
pub struct GrpcArticleClient {
    channel: Channel,
}

impl GrpcArticleClient {
    pub(crate) fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ArticleClient for GrpcArticleClient {
    async fn create(&self, draft: NewArticle) -> Result<Article, ClientError> {
        let request = pb::AddArticleReq {
            author_id: draft.author_id,
            content: Some(pb::Post {
                title: draft.title,
                body: draft.body,
            }),
        };

        let created: pb::Article = unary(
            &self.channel,
            SERVICE,
            "/article.ArticleServices/AddArticle",
            request,
        )
        .await?;

        Ok(created.into())
    }

    async fn fetch(&self, id: &str) -> Result<Article, ClientError> {
        let request = pb::GetArticleByIdReq { id: id.to_owned() };

        let found: pb::GetArticleByIdRes = unary(
            &self.channel,
            SERVICE,
            "/article.ArticleServices/GetArticleByID",
            request,
        )
        .await?;

        Ok(found.into())
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<Article>, ClientError> {
        // The article service speaks 32-bit windows; values are narrowed the
        // same way the REST layer accepted them, without range checks.
        let request = pb::GetArticleListReq {
            offset: query.offset as i32,
            limit: query.limit as i32,
            search: query.search,
        };

        let page: pb::GetArticleListRes = unary(
            &self.channel,
            SERVICE,
            "/article.ArticleServices/GetArticleList",
            request,
        )
        .await?;

        Ok(page.articles.into_iter().map(Article::from).collect())
    }

    async fn update(&self, change: ArticleUpdate) -> Result<Article, ClientError> {
        let request = pb::UpdateArticleReq {
            id: change.id,
            content: Some(pb::Post {
                title: change.title,
                body: change.body,
            }),
        };

        let updated: pb::Article = unary(
            &self.channel,
            SERVICE,
            "/article.ArticleServices/UpdateArticle",
            request,
        )
        .await?;

        Ok(updated.into())
    }

    async fn delete(&self, id: &str) -> Result<Article, ClientError> {
        let request = pb::DeleteArticleReq { id: id.to_owned() };

        let deleted: pb::Article = unary(
            &self.channel,
            SERVICE,
            "/article.ArticleServices/DeleteArticle",
            request,
        )
        .await?;

        Ok(deleted.into())
    }
}

impl From<pb::Article> for Article {
    fn from(article: pb::Article) -> Self {
        let content = article.content.unwrap_or_default();

        Article {
            id: article.id,
            author_id: article.author_id,
            title: content.title,
            body: content.body,
            author: None,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<pb::GetArticleByIdRes> for Article {
    fn from(found: pb::GetArticleByIdRes) -> Self {
        let content = found.content.unwrap_or_default();
        let author = found.author.map(|author| Author {
            id: author.id,
            fullname: author.fullname,
            created_at: author.created_at,
            updated_at: author.updated_at,
        });

        Article {
            id: found.id,
            author_id: author.as_ref().map(|a| a.id.clone()).unwrap_or_default(),
            title: content.title,
            body: content.body,
            author,
            created_at: found.created_at,
            updated_at: found.updated_at,
        }
    }
}
