pub mod client;

pub use client::IdentityClient;

use async_trait::async_trait;

use crate::auth::schema::Mode;
use crate::services::http::NotSuccessResponseInfo;

/// Fields forwarded to the identity service. `name` is present only for a
/// registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Any failure of the submission capability: network error, rejected
/// credentials or server error. The form does not distinguish between them.
#[derive(Debug, Clone)]
pub struct IdentityError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl std::fmt::Display for IdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for IdentityError {}

impl From<reqwest::Error> for IdentityError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            http_status: error.status().map(|s| s.as_u16()),
            error: error.to_string(),
        }
    }
}

impl From<NotSuccessResponseInfo> for IdentityError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self {
            http_status: Some(info.status_code),
            error: info.text,
        }
    }
}

/// The boundary through which the form reaches the identity service.
#[async_trait]
pub trait AuthBackend: std::fmt::Debug {
    async fn submit_credentials(
        &self,
        mode: Mode,
        credentials: Credentials,
    ) -> Result<(), IdentityError>;
}
