use super::view_model::use_profile_view_model;
use crate::components::{
    common::{Button, ButtonVariant},
    layout::{Layout, SuccessMessage},
};
use leptos::*;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <SuccessMessage message=vm.welcome />
                <h2 class="text-2xl font-bold text-fg">"Your DocBook profile"</h2>
                <p class="text-fg-muted">
                    "You are signed in. Appointments and records will appear here."
                </p>
                <Button variant=ButtonVariant::Link on:click=move |_| vm.logout.call(())>
                    "Sign out"
                </Button>
            </div>
        </Layout>
    }
}
