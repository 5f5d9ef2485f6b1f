use crate::{
    api::OtpPurpose,
    otp::{sequencer::REGISTER_START_PATH, Finalize, RegistrationDraft},
    state::{
        flow::use_flow_context,
        otp_flow::{use_otp_flow, OtpFlow, OtpFlowConfig},
        session::use_capabilities,
    },
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct VerifyEmailViewModel {
    pub flow: OtpFlow,
    draft: StoredValue<RegistrationDraft>,
}

impl VerifyEmailViewModel {
    pub fn email(&self) -> String {
        self.draft.with_value(|d| d.email.clone())
    }

    pub fn submit(&self) {
        self.flow
            .submit(Finalize::Register(self.draft.get_value()));
    }
}

/// `None` when no registration is pending; the user is sent back to the form.
pub fn use_verify_email_view_model() -> Option<VerifyEmailViewModel> {
    let ctx = use_flow_context();
    let Some(draft) = ctx.draft_snapshot() else {
        log::info!("no pending registration, returning to the form");
        use_capabilities()
            .navigator
            .navigate_after(REGISTER_START_PATH, 0);
        return None;
    };

    let first_name = draft.first_name.clone();
    let config = OtpFlowConfig::new(OtpPurpose::Register, draft.email.clone())
        .on_expired(move || ctx.clear_draft())
        .on_success(move |_| {
            ctx.clear_draft();
            ctx.greeting.set(Some(first_name.clone()));
        });

    Some(VerifyEmailViewModel {
        flow: use_otp_flow(config),
        draft: store_value(draft),
    })
}
