//! Shared fixtures for the HTTP integration tests.
#![allow(dead_code)]
//!
//! The stub clients stand in for the three backend services. Each one returns
//! canned records, can be switched into a failing mode, and counts the calls
//! it receives so tests can assert on RPC traffic, not just response bodies.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use blogpost_gateway::domain::clients::{ClientError, ListQuery};
use blogpost_gateway::domain::entities::{
    AccessToken, Article, ArticleUpdate, Author, AuthorUpdate, Credentials, NewArticle, NewAuthor,
};
use blogpost_gateway::prelude::{ArticleClient, AuthClient, AuthorClient, ListDefaults};
use blogpost_gateway::{routes, AppState};

pub const TIMESTAMP: &str = "2026-02-10T12:00:00Z";

pub fn sample_author(id: &str) -> Author {
    Author {
        id: id.to_owned(),
        fullname: "Jamila Doe".to_owned(),
        created_at: TIMESTAMP.to_owned(),
        updated_at: TIMESTAMP.to_owned(),
    }
}

pub fn sample_article(id: &str, author: Option<Author>) -> Article {
    Article {
        id: id.to_owned(),
        author_id: "auth-1".to_owned(),
        title: "On Gateways".to_owned(),
        body: "Thin layers compose.".to_owned(),
        author,
        created_at: TIMESTAMP.to_owned(),
        updated_at: TIMESTAMP.to_owned(),
    }
}

/// Article backend stub.
///
/// `fail_with` makes every call fail; `fail_fetch_with` fails only the by-id
/// read, which is how the hydration step after create is broken in tests.
#[derive(Default)]
pub struct StubArticleClient {
    pub fail_with: Option<String>,
    pub fail_fetch_with: Option<String>,
    pub create_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    pub last_list: Mutex<Option<ListQuery>>,
    deleted: Mutex<HashSet<String>>,
}

impl StubArticleClient {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub fn failing_fetch(message: &str) -> Self {
        Self {
            fail_fetch_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ClientError> {
        match &self.fail_with {
            Some(message) => Err(ClientError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ArticleClient for StubArticleClient {
    async fn create(&self, draft: NewArticle) -> Result<Article, ClientError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        // The backend returns the bare record; the author join only happens
        // on the by-id read.
        Ok(Article {
            author_id: draft.author_id,
            title: draft.title,
            body: draft.body,
            ..sample_article("art-1", None)
        })
    }

    async fn fetch(&self, id: &str) -> Result<Article, ClientError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        if let Some(message) = &self.fail_fetch_with {
            return Err(ClientError::new(message.clone()));
        }
        Ok(sample_article(id, Some(sample_author("auth-1"))))
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<Article>, ClientError> {
        *self.last_list.lock().unwrap() = Some(query);
        self.check()?;
        Ok(vec![
            sample_article("art-1", None),
            sample_article("art-2", None),
        ])
    }

    async fn update(&self, change: ArticleUpdate) -> Result<Article, ClientError> {
        self.check()?;
        Ok(Article {
            title: change.title,
            body: change.body,
            ..sample_article(&change.id, None)
        })
    }

    async fn delete(&self, id: &str) -> Result<Article, ClientError> {
        self.check()?;
        if !self.deleted.lock().unwrap().insert(id.to_owned()) {
            return Err(ClientError::new(format!("article {id} not found")));
        }
        Ok(sample_article(id, None))
    }
}

/// Author backend stub, same shape as the article one.
#[derive(Default)]
pub struct StubAuthorClient {
    pub fail_with: Option<String>,
    pub create_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    pub last_list: Mutex<Option<ListQuery>>,
    deleted: Mutex<HashSet<String>>,
}

impl StubAuthorClient {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ClientError> {
        match &self.fail_with {
            Some(message) => Err(ClientError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthorClient for StubAuthorClient {
    async fn create(&self, draft: NewAuthor) -> Result<Author, ClientError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(Author {
            fullname: draft.fullname,
            ..sample_author("auth-1")
        })
    }

    async fn fetch(&self, id: &str) -> Result<Author, ClientError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(sample_author(id))
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<Author>, ClientError> {
        *self.last_list.lock().unwrap() = Some(query);
        self.check()?;
        Ok(vec![sample_author("auth-1"), sample_author("auth-2")])
    }

    async fn update(&self, change: AuthorUpdate) -> Result<Author, ClientError> {
        self.check()?;
        Ok(Author {
            fullname: change.fullname,
            ..sample_author(&change.id)
        })
    }

    async fn delete(&self, id: &str) -> Result<Author, ClientError> {
        self.check()?;
        if !self.deleted.lock().unwrap().insert(id.to_owned()) {
            return Err(ClientError::new(format!("author {id} not found")));
        }
        Ok(sample_author(id))
    }
}

/// Authorization backend stub.
///
/// Accepts exactly one token; any other value is rejected the way the real
/// backend rejects one.
pub struct StubAuthClient {
    pub accepted_token: String,
    pub login_ok: bool,
    pub verify_calls: AtomicUsize,
}

impl Default for StubAuthClient {
    fn default() -> Self {
        Self {
            accepted_token: "tok-123".to_owned(),
            login_ok: true,
            verify_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuthClient for StubAuthClient {
    async fn login(&self, _credentials: Credentials) -> Result<AccessToken, ClientError> {
        if self.login_ok {
            Ok(AccessToken {
                token: self.accepted_token.clone(),
            })
        } else {
            Err(ClientError::new("invalid credentials"))
        }
    }

    async fn verify(&self, token: &str) -> Result<(), ClientError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if token == self.accepted_token {
            Ok(())
        } else {
            Err(ClientError::new("token rejected"))
        }
    }
}

pub fn make_state(
    articles: Arc<StubArticleClient>,
    authors: Arc<StubAuthorClient>,
    auth: Arc<StubAuthClient>,
) -> AppState {
    AppState {
        articles,
        authors,
        auth,
        list_defaults: ListDefaults {
            offset: 0,
            limit: 10,
        },
    }
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(routes::router(state)).unwrap()
}

/// Server over all-default stubs, for tests that only care about one backend.
pub fn default_server() -> TestServer {
    make_server(make_state(
        Arc::new(StubArticleClient::default()),
        Arc::new(StubAuthorClient::default()),
        Arc::new(StubAuthClient::default()),
    ))
}
