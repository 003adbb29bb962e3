//! # Blogpost Gateway
//!
//! A backend-for-frontend gateway exposing a REST API for authors, articles,
//! and authorization, backed by three independent gRPC services.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and backend client traits
//! - **Infrastructure Layer** ([`infrastructure`]) - gRPC connection pool and stubs
//! - **API Layer** ([`api`]) - REST handlers, DTOs, dispatch, and middleware
//!
//! The gateway owns no business logic: every HTTP verb maps onto exactly one
//! unary RPC (plus, for article creation, a follow-up read), and every RPC
//! outcome maps back onto an HTTP status and a JSON envelope.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the gateway at the backend services
//! export AUTHOR_SERVICE_HOST=localhost
//! export AUTHOR_SERVICE_PORT=9000
//! export ARTICLE_SERVICE_HOST=localhost
//! export ARTICLE_SERVICE_PORT=9001
//! export AUTHORIZATION_SERVICE_HOST=localhost
//! export AUTHORIZATION_SERVICE_PORT=9002
//!
//! # Start the gateway
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! for available options and defaults.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::pagination::ListDefaults;
    pub use crate::domain::clients::{ArticleClient, AuthClient, AuthorClient, ListQuery};
    pub use crate::domain::entities::{AccessToken, Article, Author};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
