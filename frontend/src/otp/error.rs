use thiserror::Error;

pub const INCOMPLETE_CODE: &str = "Please enter the full code.";
pub const CODE_REJECTED: &str = "The code is incorrect or has expired.";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const DISPATCH_FAILURE: &str = "We could not send a verification code. Please try again.";

/// Delayed navigation requested by a failed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Caught on the client; nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The server refused to send a code.
    #[error("{0}")]
    DispatchRejected(String),
    #[error("{0}")]
    VerifyRejected(String),
    #[error("{message}")]
    FinalizeRejected {
        message: String,
        redirect: Option<Redirect>,
    },
    #[error("{0}")]
    Transport(String),
    #[error("The verification code has expired. Please start again.")]
    Expired,
    #[error("A submission is already in progress.")]
    InFlight,
    #[error("Could not save your session: {0}")]
    Storage(String),
}

impl FlowError {
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            FlowError::FinalizeRejected { redirect, .. } => redirect.as_ref(),
            _ => None,
        }
    }
}
