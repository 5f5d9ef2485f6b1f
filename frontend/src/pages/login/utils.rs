use crate::{api::LoginRequest, otp::draft::validate_email};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let email = validate_email(&self.email.get_untracked())?;
        let password = self.password.get_untracked();
        if password.is_empty() {
            return Err("Password is required".into());
        }
        Ok(LoginRequest { email, password })
    }
}
