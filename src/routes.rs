//! Top-level router assembly.

use axum::{extract::Request, middleware, routing::get, Json, Router, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::{docs, middleware::auth, middleware::tracing, routes as api_routes};
use crate::state::AppState;

/// Builds the application router.
///
/// Resource routes are nested under `/v1` behind the Bearer verification
/// middleware; `/v1/login` and `/v1/docs` stay open.
pub fn router(state: AppState) -> Router {
    let api_docs = docs::openapi();

    let v1 = api_routes::resource_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(api_routes::public_routes())
        .route("/docs", get(move || async move { Json(api_docs) }));

    Router::new()
        .nest("/v1", v1)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the router so `/v1/article/` hits the same handler as `/v1/article`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Converts the normalized router into a connection service for `axum::serve`.
pub fn into_service(
    app: NormalizePath<Router>,
) -> axum::routing::IntoMakeService<NormalizePath<Router>> {
    ServiceExt::<Request>::into_make_service(app)
}
