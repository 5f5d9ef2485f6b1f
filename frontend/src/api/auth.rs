use serde_json::Value;

use super::{
    client::{ensure_success, ApiClient},
    types::{ApiError, AuthResponse, LoginRequest, RegisterRequest, ResetPasswordRequest},
};

/// A body without `tokens` is a plain success; a malformed `tokens` object is an error.
fn auth_response(body: Value) -> Result<AuthResponse, ApiError> {
    let carries_tokens = body.get("tokens").is_some_and(|tokens| !tokens.is_null());
    match serde_json::from_value::<AuthResponse>(body) {
        Ok(response) => Ok(response),
        Err(err) if carries_tokens => {
            log::warn!("malformed session tokens in auth response: {}", err);
            Err(ApiError::unknown("The server returned an invalid session"))
        }
        Err(_) => Ok(AuthResponse::default()),
    }
}

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let (status, body) = self.post_json("/auth/register", request).await?;
        ensure_success(status, body).and_then(auth_response)
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<AuthResponse, ApiError> {
        let (status, body) = self.post_json("/auth/reset-password", request).await?;
        ensure_success(status, body).and_then(auth_response)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let (status, body) = self.post_json("/auth/login", request).await?;
        ensure_success(status, body).and_then(auth_response)
    }
}
