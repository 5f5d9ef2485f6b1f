use crate::otp::RegistrationDraft;
use leptos::*;

/// In-memory state that links the pages of a multi-step flow.
///
/// Nothing here is persisted, so a reload drops an unfinished registration.
#[derive(Debug, Clone, Copy)]
pub struct FlowContext {
    pub draft: RwSignal<Option<RegistrationDraft>>,
    pub reset_email: RwSignal<Option<String>>,
    /// First name to greet on the landing page after a registration.
    pub greeting: RwSignal<Option<String>>,
}

impl FlowContext {
    pub fn new() -> Self {
        Self {
            draft: create_rw_signal(None),
            reset_email: create_rw_signal(None),
            greeting: create_rw_signal(None),
        }
    }

    pub fn store_draft(&self, draft: RegistrationDraft) {
        self.draft.set(Some(draft));
    }

    pub fn draft_snapshot(&self) -> Option<RegistrationDraft> {
        self.draft.get_untracked()
    }

    pub fn clear_draft(&self) {
        self.draft.set(None);
    }

    pub fn take_greeting(&self) -> Option<String> {
        let name = self.greeting.get_untracked();
        if name.is_some() {
            self.greeting.set(None);
        }
        name
    }
}

impl Default for FlowContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FlowProvider(children: Children) -> impl IntoView {
    provide_context(FlowContext::new());
    view! { <>{children()}</> }
}

pub fn use_flow_context() -> FlowContext {
    use_context::<FlowContext>().unwrap_or_else(|| {
        let ctx = FlowContext::new();
        provide_context(ctx);
        ctx
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::otp::RegisterForm;
    use crate::test_support::ssr::with_runtime;

    fn draft() -> RegistrationDraft {
        RegistrationDraft::from_form(&RegisterForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "analytical".into(),
            confirm_password: "analytical".into(),
            age: "36".into(),
            birth_day: "10".into(),
            birth_month: "12".into(),
        })
        .unwrap()
    }

    #[test]
    fn context_is_shared_once_provided() {
        with_runtime(|| {
            let first = use_flow_context();
            first.store_draft(draft());
            let second = use_flow_context();
            assert_eq!(
                second.draft_snapshot().map(|d| d.email),
                Some("ada@example.com".to_string())
            );
            second.clear_draft();
            assert!(first.draft_snapshot().is_none());
        });
    }

    #[test]
    fn greeting_is_consumed_once() {
        with_runtime(|| {
            let ctx = use_flow_context();
            ctx.greeting.set(Some("Ada".into()));
            assert_eq!(ctx.take_greeting().as_deref(), Some("Ada"));
            assert!(ctx.take_greeting().is_none());
        });
    }
}
