//! Author request bodies.

use serde::Deserialize;

use crate::domain::entities::{AuthorUpdate, NewAuthor};

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub fullname: String,
}

impl From<CreateAuthorRequest> for NewAuthor {
    fn from(body: CreateAuthorRequest) -> Self {
        NewAuthor {
            fullname: body.fullname,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub id: String,
    pub fullname: String,
}

impl From<UpdateAuthorRequest> for AuthorUpdate {
    fn from(body: UpdateAuthorRequest) -> Self {
        AuthorUpdate {
            id: body.id,
            fullname: body.fullname,
        }
    }
}
