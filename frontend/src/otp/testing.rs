use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;

use super::gateway::VerificationGateway;
use crate::api::{
    ApiError, AuthResponse, OtpPurpose, RegisterRequest, ResetPasswordRequest, VerifyOutcome,
};

/// Scripted gateway. `None` answers succeed; every call is recorded.
#[derive(Default)]
pub struct FakeGateway {
    pub send: Option<Result<(), ApiError>>,
    pub verify: Option<Result<VerifyOutcome, ApiError>>,
    pub register: Option<Result<AuthResponse, ApiError>>,
    pub reset: Option<Result<AuthResponse, ApiError>>,
    /// When set, verify waits for this before answering.
    pub verify_gate: RefCell<Option<oneshot::Receiver<()>>>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl VerificationGateway for FakeGateway {
    async fn send_code(&self, purpose: OtpPurpose, email: &str) -> Result<(), ApiError> {
        self.record(format!("send:{}:{}", purpose, email));
        self.send.clone().unwrap_or(Ok(()))
    }

    async fn verify_code(
        &self,
        purpose: OtpPurpose,
        email: &str,
        code: &str,
    ) -> Result<VerifyOutcome, ApiError> {
        self.record(format!("verify:{}:{}:{}", purpose, email, code));
        let gate = self.verify_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.verify.clone().unwrap_or(Ok(VerifyOutcome {
            verified: true,
            message: None,
        }))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("register:{}:{}", request.email, request.otp));
        self.register.clone().unwrap_or_else(|| Ok(AuthResponse::default()))
    }

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.record(format!("reset:{}:{}", request.email, request.otp));
        self.reset.clone().unwrap_or_else(|| Ok(AuthResponse::default()))
    }
}
