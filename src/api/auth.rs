//! Session endpoints.

use gloo_net::http::Method;
use hoodmap_core::ApiError;
use hoodmap_core::models::{LoginRequest, Session, SignupRequest};

use super::ApiClient;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        self.post("/auth/login", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Session, ApiError> {
        self.post("/auth/signup", request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "/auth/logout").await
    }

    /// Current session, from the cookie. `Unauthorized` when signed out.
    pub async fn session(&self) -> Result<Session, ApiError> {
        self.get("/auth/me").await
    }
}
