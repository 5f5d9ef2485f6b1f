use super::view_model::use_login_view_model;
use crate::components::{
    common::{Button, TextField},
    error::InlineErrorMessage,
    layout::AuthCard,
};
use leptos::*;
use leptos_router::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    view! {
        <AuthCard title="Sign in to DocBook">
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <TextField id="email" label="Email address" value=vm.form.email input_type="email" autocomplete="email" />
                <TextField id="password" label="Password" value=vm.form.password input_type="password" autocomplete="current-password" />
                <InlineErrorMessage error=vm.error />
                <Button loading=pending attr:type="submit">
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </Button>
            </form>
            <div class="flex justify-between text-sm">
                <A href="/forgot-password" class="font-medium text-link hover:text-link-hover">
                    "Forgot your password?"
                </A>
                <A href="/register" class="font-medium text-link hover:text-link-hover">
                    "Create an account"
                </A>
            </div>
        </AuthCard>
    }
}
