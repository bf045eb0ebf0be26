//! Login and registration against the auth endpoints
//!
//! Both operations are unauthenticated; the returned JWT becomes the
//! bearer token for everything else. Persisting the session is the
//! state layer's job (`wayfare_core::session`).

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use wayfare_domain::User;

/// `POST /auth/local` response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub jwt: String,
    pub user: User,
}

/// `POST /auth/local/register` response. The backend may or may not echo
/// the created identity.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub jwt: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Authenticate with an identifier (email or username) and password.
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = self
            .post_json(
                "auth/local",
                &LoginBody {
                    identifier,
                    password,
                },
                false,
            )
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Register a new account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let body = self
            .post_json(
                "auth/local/register",
                &RegisterBody {
                    username,
                    email,
                    password,
                },
                false,
            )
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
