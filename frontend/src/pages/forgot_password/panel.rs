use super::view_model::use_forgot_password_view_model;
use crate::components::{
    common::{Button, TextField},
    error::InlineErrorMessage,
    layout::AuthCard,
};
use leptos::*;
use leptos_router::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let pending = vm.submit_action.pending();

    view! {
        <AuthCard title="Reset your password">
            <p class="text-center text-sm text-fg-muted">
                "Enter your email address and we'll send you a verification code."
            </p>
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <TextField id="email-address" label="Email address" value=vm.email input_type="email" autocomplete="email" />
                <InlineErrorMessage error=vm.error />
                <Button loading=pending attr:type="submit">
                    {move || if pending.get() { "Sending..." } else { "Send code" }}
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
