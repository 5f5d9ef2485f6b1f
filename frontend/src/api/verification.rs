use super::{
    client::{ensure_success, ApiClient},
    normalize,
    types::{ApiError, OtpPurpose, SendCodeRequest, VerifyCodeRequest, VerifyOutcome},
};

impl ApiClient {
    /// Asks the verification service to e-mail a fresh code. Only the status is inspected.
    pub async fn send_verification_code(
        &self,
        purpose: OtpPurpose,
        email: &str,
    ) -> Result<(), ApiError> {
        let request = SendCodeRequest {
            purpose,
            email: email.to_string(),
        };
        let (status, body) = self.post_json("/verification/send", &request).await?;
        ensure_success(status, body).map(|_| ())
    }

    pub async fn verify_code(
        &self,
        purpose: OtpPurpose,
        email: &str,
        otp: &str,
    ) -> Result<VerifyOutcome, ApiError> {
        let request = VerifyCodeRequest {
            purpose,
            email: email.to_string(),
            otp: otp.to_string(),
        };
        let (status, body) = self.post_json("/verification/verify", &request).await?;
        let body = ensure_success(status, body)?;
        Ok(normalize::verify_outcome(status, &body))
    }
}
