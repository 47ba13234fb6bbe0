use std::sync::Mutex;

use async_trait::async_trait;

use crate::auth::schema::Mode;
use crate::services::identity::{AuthBackend, Credentials, IdentityError};

/// Test double for the identity service, recording every capability call.
#[derive(Debug)]
pub struct FakeBackend {
    response: Result<(), IdentityError>,
    calls: Mutex<Vec<(Mode, Credentials)>>,
}

impl FakeBackend {
    pub fn succeeding() -> Self {
        Self {
            response: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(IdentityError {
                http_status: Some(401),
                error: reason.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Mode, Credentials)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthBackend for FakeBackend {
    async fn submit_credentials(
        &self,
        mode: Mode,
        credentials: Credentials,
    ) -> Result<(), IdentityError> {
        self.calls.lock().unwrap().push((mode, credentials));
        self.response.clone()
    }
}
