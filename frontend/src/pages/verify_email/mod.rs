use leptos::*;

pub mod view_model;

mod panel;

pub use panel::VerifyEmailPanel;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    view! { <VerifyEmailPanel /> }
}
