//! Login request body.

use serde::Deserialize;

use crate::domain::entities::Credentials;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(body: LoginRequest) -> Self {
        Credentials {
            username: body.username,
            password: body.password,
        }
    }
}
