use crate::{
    state::{
        flow::use_flow_context,
        session::{use_capabilities, use_logout},
    },
    utils::speech::welcome_message,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    /// Set once after a registration finished in this tab.
    pub welcome: RwSignal<Option<String>>,
    pub logout: Callback<()>,
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let ctx = use_flow_context();
    let caps = use_capabilities();
    let welcome = create_rw_signal(None::<String>);

    create_effect(move |_| {
        if ctx.greeting.with(Option::is_none) {
            return;
        }
        if let Some(name) = ctx.take_greeting() {
            let message = welcome_message(&name);
            caps.announcer.announce(&message);
            welcome.set(Some(message));
        }
    });

    ProfileViewModel {
        welcome,
        logout: use_logout(),
    }
}
