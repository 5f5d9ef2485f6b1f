use leptos::*;

mod panel;
mod view_model;

pub use panel::ProfilePanel;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <ProfilePanel /> }
}
