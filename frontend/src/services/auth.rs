//! Auth gateway: register, login, and current-user lookup
//!
//! Login follows the OAuth2 password-grant convention: credentials go out as
//! multipart form fields named `username` and `password`, and the returned
//! `access_token` is written to the credential store with a 7-day expiry.
//! Login does not touch the session's user projection; callers follow up with
//! [`AuthApi::current_user`] and
//! [`crate::state::session::SessionContext::set_user`].
//!
//! There is no server-side logout; ending a session is
//! [`crate::state::session::SessionContext::clear`].

use shared::dto::auth::{RegisterRequest, TokenResponse, User};
use web_sys::FormData;

use crate::services::http::{ApiClient, ApiError};
use crate::utils::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    /// Create an account. Validation failures (duplicate email and the like)
    /// come back as the server's error detail; there is no local retry.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<User, ApiError> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.filter(|name| !name.is_empty()),
        };
        self.client.post_json("/users/register", &request).await
    }

    /// Exchange credentials for a bearer token and store it.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = FormData::new().map_err(|err| ApiError::Network(format!("{err:?}")))?;
        form.append_with_str("username", email)
            .map_err(|err| ApiError::Network(format!("{err:?}")))?;
        form.append_with_str("password", password)
            .map_err(|err| ApiError::Network(format!("{err:?}")))?;

        let token: TokenResponse = self.client.post_form("/users/login", form).await?;
        storage::save_token(&token.access_token);
        Ok(token)
    }

    /// Fetch the authenticated user. Every authenticated page calls this on
    /// mount to refresh the session, since the persisted user may be stale or
    /// absent after a reload.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.client.get_json("/users/me").await
    }
}
