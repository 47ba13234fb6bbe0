use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::auth::schema::Mode;
use crate::services::http::ResponseExt;

use super::{AuthBackend, Credentials, IdentityError};

#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub status: String,
    pub data: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: Option<String>, // JWT token for authenticated requests
    pub user: Option<User>,    // User data when login is successful
}

#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, IdentityError> {
        let url = format!("{}/auth/{}", self.base_url, endpoint);

        let req = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body);
        tracing::debug!("Sending http request: {:?}", req);

        let response = req.send().await?;

        Ok(response)
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, IdentityError> {
        let response = self
            .post_json("sign-up", &request)
            .await?
            .check_success()
            .await?;

        let signup_response: SignUpResponse = response.json().await?;
        Ok(signup_response)
    }

    pub async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, IdentityError> {
        let response = self
            .post_json("sign-in", &request)
            .await?
            .check_success()
            .await?;

        let signin_response: SignInResponse = response.json().await?;
        Ok(signin_response)
    }
}

#[async_trait]
impl AuthBackend for IdentityClient {
    async fn submit_credentials(
        &self,
        mode: Mode,
        credentials: Credentials,
    ) -> Result<(), IdentityError> {
        match (mode, credentials.name) {
            (Mode::SignUp, Some(name)) => self
                .sign_up(SignUpRequest {
                    name,
                    email: credentials.email,
                    password: credentials.password,
                })
                .await
                .map(|_| ()),
            (Mode::SignUp, None) => Err(IdentityError {
                http_status: None,
                error: "a name is required to create an account".to_string(),
            }),
            (Mode::SignIn, _) => self
                .sign_in(SignInRequest {
                    email: credentials.email,
                    password: credentials.password,
                })
                .await
                .map(|_| ()),
        }
    }
}
