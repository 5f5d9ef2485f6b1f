use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    Register,
    ResetPassword,
}

impl OtpPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Register => "register",
            OtpPurpose::ResetPassword => "reset_password",
        }
    }
}

impl std::fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendCodeRequest {
    #[serde(rename = "type")]
    pub purpose: OtpPurpose,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyCodeRequest {
    #[serde(rename = "type")]
    pub purpose: OtpPurpose,
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub otp: String,
    pub day: u32,
    pub month: u32,
}

#[derive(Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    #[serde(rename = "AccessToken", alias = "accessToken", alias = "access_token")]
    pub access_token: String,
    #[serde(rename = "RefreshToken", alias = "refreshToken", alias = "refresh_token")]
    pub refresh_token: String,
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens").finish_non_exhaustive()
    }
}

/// Body of register / reset-password / login responses. Tokens are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub tokens: Option<SessionTokens>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub verified: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub const UNKNOWN: &'static str = "UNKNOWN";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::UNKNOWN.to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::REQUEST_FAILED.to_string(),
            details: None,
        }
    }

    /// The request never got an answer from the server.
    pub fn is_transport(&self) -> bool {
        self.code == Self::REQUEST_FAILED
    }

    /// Whether `error` carries text the server wrote for the user.
    pub fn has_server_message(&self) -> bool {
        self.code != Self::UNKNOWN && self.code != Self::REQUEST_FAILED
    }
}
