//! `/auth` endpoints.

use super::FetchClient;
use crate::error::ApiResult;
use crate::models::LoginRequest;

impl FetchClient {
    /// `POST /auth/login`. The server answers with the session cookie.
    pub async fn login(&self, name: &str, email: &str) -> ApiResult<()> {
        self.post_unit("/auth/login", &LoginRequest { name, email })
            .await?;
        tracing::info!("Logged in as {}", email);
        Ok(())
    }

    /// `POST /auth/logout`.
    ///
    /// The local session is dropped whether or not the server call succeeds.
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.post_empty("/auth/logout").await;
        self.clear_session();
        result
    }
}
