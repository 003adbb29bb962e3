//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::api::dto::pagination::ListDefaults;
use crate::domain::clients::{ArticleClient, AuthClient, AuthorClient};

/// Read-only state shared by every request task.
///
/// The clients and defaults are immutable after startup, so the state is
/// freely cloneable with no locking.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleClient>,
    pub authors: Arc<dyn AuthorClient>,
    pub auth: Arc<dyn AuthClient>,
    pub list_defaults: ListDefaults,
}
