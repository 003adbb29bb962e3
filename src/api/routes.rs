//! API route configuration.
//!
//! Resource routes accept an optional Bearer token, verified by
//! [`crate::api::middleware::auth`] when the router is assembled in
//! [`crate::routes::app_router`].

use crate::api::dispatch;
use crate::api::handlers::login_handler;
use crate::api::resources::{Articles, Authors};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Resource routes, mounted under `/v1`.
///
/// # Endpoints
///
/// - `GET    /article`      - List articles (offset/limit/search)
/// - `POST   /article`      - Create an article (hydrated via follow-up read)
/// - `PUT    /article`      - Update an article
/// - `GET    /article/{id}` - Get one article with its author
/// - `DELETE /article/{id}` - Delete an article
/// - `GET    /author`       - List authors
/// - `POST   /author`       - Create an author
/// - `PUT    /author`       - Update an author
/// - `GET    /author/{id}`  - Get one author
/// - `DELETE /author/{id}`  - Delete an author
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/article",
            get(dispatch::list_handler::<Articles>)
                .post(dispatch::create_handler::<Articles>)
                .put(dispatch::update_handler::<Articles>),
        )
        .route(
            "/article/{id}",
            get(dispatch::get_handler::<Articles>).delete(dispatch::delete_handler::<Articles>),
        )
        .route(
            "/author",
            get(dispatch::list_handler::<Authors>)
                .post(dispatch::create_handler::<Authors>)
                .put(dispatch::update_handler::<Authors>),
        )
        .route(
            "/author/{id}",
            get(dispatch::get_handler::<Authors>).delete(dispatch::delete_handler::<Authors>),
        )
}

/// Routes that never require a token: login itself.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", post(login_handler))
}
