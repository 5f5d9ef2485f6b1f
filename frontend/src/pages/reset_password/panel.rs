use super::view_model::{use_reset_password_view_model, ResetPasswordViewModel};
use crate::components::{
    common::{Button, TextField},
    countdown::CountdownBadge,
    error::InlineErrorMessage,
    layout::{AuthCard, LoadingSpinner, SuccessMessage},
    otp_input::OtpInput,
};
use leptos::*;
use leptos_router::*;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    match use_reset_password_view_model() {
        Some(vm) => view! { <ResetPasswordForm vm=vm /> }.into_view(),
        None => view! { <LoadingSpinner /> }.into_view(),
    }
}

#[component]
fn ResetPasswordForm(vm: ResetPasswordViewModel) -> impl IntoView {
    let flow = vm.flow;
    let busy = Signal::derive(move || flow.phase.get().is_busy());
    let locked = Signal::derive(move || {
        let phase = flow.phase.get();
        phase.is_busy() || phase.is_terminal()
    });

    view! {
        <AuthCard title="Set new password">
            <p class="text-center text-sm text-fg-muted">
                "Enter the code sent to " <span class="font-medium text-fg">{vm.email()}</span>
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
                <TextField id="password" label="New password" value=vm.password input_type="password" autocomplete="new-password" />
                <TextField id="confirm-password" label="Confirm new password" value=vm.confirm_password input_type="password" autocomplete="new-password" />
                <InlineErrorMessage error=flow.error />
                <SuccessMessage message=flow.notice />
                <Button
                    loading=busy
                    disabled=Signal::derive(move || !flow.can_submit())
                    attr:type="submit"
                >
                    "Reset password"
                </Button>
            </form>
            <div class="text-sm text-center">
                <A href="/login" class="font-medium text-link hover:text-link-hover">
                    "Back to login"
                </A>
            </div>
        </AuthCard>
    }
}
