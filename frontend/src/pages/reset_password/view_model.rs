use crate::{
    api::OtpPurpose,
    otp::{draft::validate_new_password, Finalize},
    state::{
        flow::use_flow_context,
        otp_flow::{use_otp_flow, OtpFlow, OtpFlowConfig},
        session::use_capabilities,
    },
};
use leptos::*;

pub const FORGOT_PATH: &str = "/forgot-password";

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub flow: OtpFlow,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    email: StoredValue<String>,
}

impl ResetPasswordViewModel {
    pub fn email(&self) -> String {
        self.email.get_value()
    }

    pub fn submit(&self) {
        let password = self.password.get_untracked();
        if let Err(msg) = validate_new_password(&password, &self.confirm_password.get_untracked()) {
            self.flow.error.set(Some(msg));
            return;
        }
        self.flow.submit(Finalize::ResetPassword {
            new_password: password,
        });
    }
}

/// `None` when no reset was requested; the user is sent back to request one.
pub fn use_reset_password_view_model() -> Option<ResetPasswordViewModel> {
    let ctx = use_flow_context();
    let Some(email) = ctx.reset_email.get_untracked() else {
        log::info!("no pending password reset, returning to the request form");
        use_capabilities().navigator.navigate_after(FORGOT_PATH, 0);
        return None;
    };

    let config = OtpFlowConfig::new(OtpPurpose::ResetPassword, email.clone())
        .on_expired(move || ctx.reset_email.set(None))
        .on_success(move |_| ctx.reset_email.set(None));

    Some(ResetPasswordViewModel {
        flow: use_otp_flow(config),
        password: create_rw_signal(String::new()),
        confirm_password: create_rw_signal(String::new()),
        email: store_value(email),
    })
}
