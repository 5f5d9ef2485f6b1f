use super::view_model::{use_verify_email_view_model, VerifyEmailViewModel};
use crate::components::{
    common::Button,
    countdown::CountdownBadge,
    error::InlineErrorMessage,
    layout::{AuthCard, LoadingSpinner, SuccessMessage},
    otp_input::OtpInput,
};
use leptos::*;
use leptos_router::*;

#[component]
pub fn VerifyEmailPanel() -> impl IntoView {
    match use_verify_email_view_model() {
        Some(vm) => view! { <VerifyEmailForm vm=vm /> }.into_view(),
        None => view! { <LoadingSpinner /> }.into_view(),
    }
}

#[component]
fn VerifyEmailForm(vm: VerifyEmailViewModel) -> impl IntoView {
    let flow = vm.flow;
    let busy = Signal::derive(move || flow.phase.get().is_busy());
    let locked = Signal::derive(move || {
        let phase = flow.phase.get();
        phase.is_busy() || phase.is_terminal()
    });
    let email = vm.email();

    view! {
        <AuthCard title="Verify your email">
            <p class="text-center text-sm text-fg-muted">
                "We sent a code to " <span class="font-medium text-fg">{email}</span>
            </p>
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <OtpInput collector=flow.collector on_submit=move |_: ()| vm.submit() disabled=locked />
                <CountdownBadge
                    countdown=flow.countdown
                    on_resend=move |_: ()| flow.resend()
                    resend_pending=flow.resend_action.pending()
                />
                <InlineErrorMessage error=flow.error />
                <SuccessMessage message=flow.notice />
                <Button
                    loading=busy
                    disabled=Signal::derive(move || !flow.can_submit())
                    attr:type="submit"
                >
                    "Verify and create account"
                </Button>
            </form>
            <p class="text-sm text-center">
                <A href="/register" class="font-medium text-link hover:text-link-hover">
                    "Use a different email"
                </A>
            </p>
        </AuthCard>
    }
}
