//! The OTP-gated registration and password-reset flow, free of any UI.

pub mod collector;
pub mod countdown;
pub mod dispatch;
pub mod draft;
pub mod error;
pub mod gateway;
pub mod sequencer;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::{CollectorOutcome, OtpCollector, OtpKey};
pub use countdown::{Countdown, ResendBlocked, Tick};
pub use dispatch::OtpDispatcher;
pub use draft::{RegisterForm, RegistrationDraft};
pub use error::{FlowError, Redirect};
pub use gateway::VerificationGateway;
pub use sequencer::{Completion, Finalize, OtpSequencer, Phase};
