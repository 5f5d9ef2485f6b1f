use async_trait::async_trait;

use crate::api::{
    ApiClient, ApiError, AuthResponse, OtpPurpose, RegisterRequest, ResetPasswordRequest,
    VerifyOutcome,
};

/// The remote calls the OTP flow depends on.
#[async_trait(?Send)]
pub trait VerificationGateway {
    async fn send_code(&self, purpose: OtpPurpose, email: &str) -> Result<(), ApiError>;

    async fn verify_code(
        &self,
        purpose: OtpPurpose,
        email: &str,
        code: &str,
    ) -> Result<VerifyOutcome, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<AuthResponse, ApiError>;
}

#[async_trait(?Send)]
impl VerificationGateway for ApiClient {
    async fn send_code(&self, purpose: OtpPurpose, email: &str) -> Result<(), ApiError> {
        self.send_verification_code(purpose, email).await
    }

    async fn verify_code(
        &self,
        purpose: OtpPurpose,
        email: &str,
        code: &str,
    ) -> Result<VerifyOutcome, ApiError> {
        ApiClient::verify_code(self, purpose, email, code).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        ApiClient::register(self, request).await
    }

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<AuthResponse, ApiError> {
        ApiClient::reset_password(self, request).await
    }
}
