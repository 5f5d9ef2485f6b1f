use super::repository::ForgotPasswordRepository;
use crate::{
    api::ApiClient,
    otp::{draft::validate_email, FlowError},
    state::{flow::use_flow_context, session::use_capabilities},
};
use leptos::*;
use std::rc::Rc;

pub const RESET_PATH: &str = "/reset-password";

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submit_action: Action<String, Result<String, FlowError>>,
}

impl ForgotPasswordViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match validate_email(&self.email.get_untracked()) {
            Ok(email) => {
                self.error.set(None);
                self.submit_action.dispatch(email);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));
    let flow = use_flow_context();
    let caps = use_capabilities();

    let email = create_rw_signal(flow.reset_email.get_untracked().unwrap_or_default());
    let error = create_rw_signal(None);

    let submit_action = create_action(move |value: &String| {
        let repo = repository.clone();
        let email = value.clone();
        async move {
            repo.request_reset_code(&email).await?;
            Ok::<_, FlowError>(email)
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(address) => {
                    error.set(None);
                    flow.reset_email.set(Some(address));
                    caps.navigator.navigate(RESET_PATH);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    ForgotPasswordViewModel {
        email,
        error,
        submit_action,
    }
}
