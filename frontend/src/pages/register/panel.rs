use super::view_model::use_register_view_model;
use crate::components::{
    common::{Button, TextField},
    error::InlineErrorMessage,
    layout::AuthCard,
};
use leptos::*;
use leptos_router::*;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let pending = vm.submit_action.pending();

    view! {
        <AuthCard title="Create your DocBook account">
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div class="grid grid-cols-2 gap-4">
                    <TextField id="first-name" label="First name" value=form.first_name autocomplete="given-name" />
                    <TextField id="last-name" label="Last name" value=form.last_name autocomplete="family-name" />
                </div>
                <TextField id="email" label="Email address" value=form.email input_type="email" autocomplete="email" />
                <TextField id="password" label="Password" value=form.password input_type="password" autocomplete="new-password" />
                <TextField id="confirm-password" label="Confirm password" value=form.confirm_password input_type="password" autocomplete="new-password" />
                <div class="grid grid-cols-3 gap-4">
                    <TextField id="age" label="Age" value=form.age input_type="number" />
                    <TextField id="birth-day" label="Birth day" value=form.birth_day input_type="number" />
                    <TextField id="birth-month" label="Birth month" value=form.birth_month input_type="number" />
                </div>
                <InlineErrorMessage error=vm.error />
                <Button loading=pending attr:type="submit">
                    {move || if pending.get() { "Sending code..." } else { "Continue" }}
                </Button>
            </form>
            <p class="text-sm text-center text-fg-muted">
                "Already registered? "
                <A href="/login" class="font-medium text-link hover:text-link-hover">
                    "Sign in"
                </A>
            </p>
        </AuthCard>
    }
}
