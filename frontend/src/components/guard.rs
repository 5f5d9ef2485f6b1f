use crate::{
    otp::sequencer::LOGIN_PATH,
    state::session::{use_capabilities, use_session},
};
use leptos::*;

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let caps = use_capabilities();
    let is_authenticated = create_memo(move |_| session.get().is_authenticated);
    create_effect(move |_| {
        if !should_render_children(is_authenticated.get(), caps.store.has_session()) {
            caps.navigator.navigate(LOGIN_PATH);
        }
    });
    let store = use_capabilities().store;
    view! {
        <Show when=move || should_render_children(is_authenticated.get(), store.has_session())>
            {children()}
        </Show>
    }
}

/// Both the session signal and the stored token must agree.
fn should_render_children(is_authenticated: bool, has_token: bool) -> bool {
    is_authenticated && has_token
}
