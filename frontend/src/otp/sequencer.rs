//! Verify-then-finalize state machine.
//!
//! A submission walks `Idle → Submitting → VerifyPending`, then either
//! `VerifyFailed → Idle` or `VerifyOk → FinalizePending`, and ends in
//! `FinalizeFailed` or `FinalizeOk`. Finalize is only ever called after the
//! server reported the code as verified, and tokens are only written after
//! finalize succeeded.

use std::{cell::Cell, rc::Rc};

use super::{
    collector::OtpCollector,
    draft::RegistrationDraft,
    error::{FlowError, Redirect, CODE_REJECTED, GENERIC_FAILURE, INCOMPLETE_CODE},
    gateway::VerificationGateway,
};
use crate::{
    api::{ApiError, OtpPurpose, ResetPasswordRequest},
    config::FlowSettings,
    utils::{navigation::Navigator, storage::TokenStore},
};

pub const REGISTER_START_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    VerifyPending,
    VerifyFailed,
    VerifyOk,
    FinalizePending,
    FinalizeFailed,
    FinalizeOk,
    Expired,
}

impl Phase {
    /// A request is outstanding; the submit control stays disabled.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Phase::Submitting | Phase::VerifyPending | Phase::VerifyOk | Phase::FinalizePending
        )
    }

    /// No further submission is possible in this attempt. A reset that
    /// failed to finalize moves on to `Idle`, so only a failure that stays
    /// put counts here.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::FinalizeOk | Phase::FinalizeFailed | Phase::Expired)
    }
}

/// The action performed once the code is verified.
#[derive(Clone)]
pub enum Finalize {
    Register(RegistrationDraft),
    ResetPassword { new_password: String },
}

impl Finalize {
    pub fn purpose(&self) -> OtpPurpose {
        match self {
            Finalize::Register(_) => OtpPurpose::Register,
            Finalize::ResetPassword { .. } => OtpPurpose::ResetPassword,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub tokens_saved: bool,
    pub destination: String,
}

struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct OtpSequencer {
    gateway: Rc<dyn VerificationGateway>,
    store: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    settings: FlowSettings,
    in_flight: Cell<bool>,
    expired: Cell<bool>,
}

impl OtpSequencer {
    pub fn new(
        gateway: Rc<dyn VerificationGateway>,
        store: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
        settings: FlowSettings,
    ) -> Self {
        Self {
            gateway,
            store,
            navigator,
            settings,
            in_flight: Cell::new(false),
            expired: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Refuses every later submission of this attempt.
    pub fn mark_expired(&self) {
        self.expired.set(true);
    }

    pub async fn submit(
        &self,
        email: &str,
        collector: &OtpCollector,
        finalize: Finalize,
        on_phase: &dyn Fn(Phase),
    ) -> Result<Completion, FlowError> {
        if self.expired.get() {
            return Err(FlowError::Expired);
        }
        if self.in_flight.get() {
            return Err(FlowError::InFlight);
        }
        if !collector.is_complete() {
            on_phase(Phase::Idle);
            return Err(FlowError::Validation(INCOMPLETE_CODE.to_string()));
        }

        let _guard = InFlight::enter(&self.in_flight);
        let purpose = finalize.purpose();
        let code = collector.code();
        on_phase(Phase::Submitting);

        on_phase(Phase::VerifyPending);
        match self.gateway.verify_code(purpose, email, &code).await {
            Ok(outcome) if outcome.verified => {
                log::info!("code verified: purpose={}", purpose);
            }
            Ok(outcome) => {
                log::warn!("code rejected: purpose={}", purpose);
                on_phase(Phase::VerifyFailed);
                on_phase(Phase::Idle);
                return Err(FlowError::VerifyRejected(
                    outcome.message.unwrap_or_else(|| CODE_REJECTED.to_string()),
                ));
            }
            Err(err) => {
                log::warn!("verify failed: purpose={} code={}", purpose, err.code);
                on_phase(Phase::VerifyFailed);
                on_phase(Phase::Idle);
                return Err(verify_error(err));
            }
        }
        on_phase(Phase::VerifyOk);

        on_phase(Phase::FinalizePending);
        let response = match finalize {
            Finalize::Register(draft) => {
                self.gateway
                    .register(&draft.into_register_request(code))
                    .await
            }
            Finalize::ResetPassword { new_password } => {
                self.gateway
                    .reset_password(&ResetPasswordRequest {
                        email: email.to_string(),
                        otp: code,
                        password: new_password,
                    })
                    .await
            }
        };

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                log::warn!("finalize failed: purpose={} code={}", purpose, err.code);
                on_phase(Phase::FinalizeFailed);
                let redirect = self.failure_redirect(purpose);
                if redirect.is_none() {
                    on_phase(Phase::Idle);
                }
                return Err(FlowError::FinalizeRejected {
                    message: finalize_message(&err),
                    redirect,
                });
            }
        };

        let tokens_saved = match response.tokens {
            Some(tokens) => {
                if let Err(err) = self.store.save(&tokens) {
                    log::error!("failed to persist session: {}", err);
                    self.store.clear();
                    on_phase(Phase::FinalizeFailed);
                    return Err(FlowError::Storage(err));
                }
                true
            }
            None => false,
        };

        on_phase(Phase::FinalizeOk);
        let destination = if tokens_saved || purpose == OtpPurpose::Register {
            self.settings.landing_path.clone()
        } else {
            LOGIN_PATH.to_string()
        };
        log::info!("flow finished: purpose={} destination={}", purpose, destination);
        self.navigator.navigate(&destination);

        Ok(Completion {
            tokens_saved,
            destination,
        })
    }

    /// Registration restarts from the form after a failed finalize.
    fn failure_redirect(&self, purpose: OtpPurpose) -> Option<Redirect> {
        match purpose {
            OtpPurpose::Register => Some(Redirect {
                path: REGISTER_START_PATH.to_string(),
                delay_ms: self.settings.finalize_failure_redirect_ms,
            }),
            OtpPurpose::ResetPassword => None,
        }
    }
}

fn verify_error(err: ApiError) -> FlowError {
    if err.has_server_message() {
        FlowError::VerifyRejected(err.error)
    } else {
        FlowError::Transport(GENERIC_FAILURE.to_string())
    }
}

fn finalize_message(err: &ApiError) -> String {
    if err.has_server_message() {
        err.error.clone()
    } else {
        GENERIC_FAILURE.to_string()
    }
}
