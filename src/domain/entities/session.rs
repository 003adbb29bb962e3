//! Login credentials and the token issued by the authorization backend.

use serde::Serialize;

/// Username/password pair forwarded to the authorization backend.
///
/// The gateway never inspects or stores these; they travel through exactly
/// one login RPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Opaque token minted by the authorization backend.
#[derive(Debug, Clone, Serialize)]
pub struct AccessToken {
    pub token: String,
}
