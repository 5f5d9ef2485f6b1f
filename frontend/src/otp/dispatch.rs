use std::rc::Rc;

use super::{
    draft::validate_email,
    error::{FlowError, DISPATCH_FAILURE},
    gateway::VerificationGateway,
};
use crate::api::OtpPurpose;

/// Requests one-time codes. Calling it again for the same address is a resend.
#[derive(Clone)]
pub struct OtpDispatcher {
    gateway: Rc<dyn VerificationGateway>,
}

impl OtpDispatcher {
    pub fn new(gateway: Rc<dyn VerificationGateway>) -> Self {
        Self { gateway }
    }

    pub async fn request_code(&self, purpose: OtpPurpose, email: &str) -> Result<(), FlowError> {
        let email = validate_email(email).map_err(FlowError::Validation)?;
        match self.gateway.send_code(purpose, &email).await {
            Ok(()) => {
                log::info!("verification code requested: purpose={}", purpose);
                Ok(())
            }
            Err(err) => {
                log::warn!("verification code request failed: purpose={} code={}", purpose, err.code);
                if err.has_server_message() {
                    Err(FlowError::DispatchRejected(err.error))
                } else {
                    Err(FlowError::Transport(DISPATCH_FAILURE.to_string()))
                }
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::otp::testing::FakeGateway;

    #[tokio::test]
    async fn invalid_email_never_reaches_the_gateway() {
        let gateway = Rc::new(FakeGateway::default());
        let dispatcher = OtpDispatcher::new(gateway.clone());
        let err = dispatcher
            .request_code(OtpPurpose::Register, "not-an-email")
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
        assert_eq!(gateway.calls().len(), 0);
    }

    #[tokio::test]
    async fn trimmed_email_is_sent_with_purpose() {
        let gateway = Rc::new(FakeGateway::default());
        let dispatcher = OtpDispatcher::new(gateway.clone());
        dispatcher
            .request_code(OtpPurpose::ResetPassword, "  ada@example.com ")
            .await
            .unwrap();
        assert_eq!(gateway.calls(), vec!["send:reset_password:ada@example.com"]);
    }

    #[tokio::test]
    async fn server_message_is_surfaced_verbatim() {
        let gateway = Rc::new(FakeGateway {
            send: Some(Err(ApiError {
                error: "Email not registered".into(),
                code: "HTTP_404".into(),
                details: None,
            })),
            ..Default::default()
        });
        let err = OtpDispatcher::new(gateway)
            .request_code(OtpPurpose::ResetPassword, "ada@example.com")
            .await
            .unwrap_err();
        assert_eq!(err, FlowError::DispatchRejected("Email not registered".into()));
    }

    #[tokio::test]
    async fn missing_message_uses_generic_fallback() {
        let gateway = Rc::new(FakeGateway {
            send: Some(Err(ApiError::request_failed("Request failed: dns error"))),
            ..Default::default()
        });
        let err = OtpDispatcher::new(gateway)
            .request_code(OtpPurpose::Register, "ada@example.com")
            .await
            .unwrap_err();
        assert_eq!(err, FlowError::Transport(DISPATCH_FAILURE.into()));
    }
}
