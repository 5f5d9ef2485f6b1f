use super::repository::RegisterRepository;
use crate::{
    api::ApiClient,
    otp::{FlowError, RegisterForm, RegistrationDraft},
    state::{flow::use_flow_context, session::use_capabilities},
};
use leptos::*;
use std::rc::Rc;

pub const VERIFY_PATH: &str = "/register/verify";

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub age: RwSignal<String>,
    pub birth_day: RwSignal<String>,
    pub birth_month: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            age: create_rw_signal(String::new()),
            birth_day: create_rw_signal(String::new()),
            birth_month: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn snapshot(&self) -> RegisterForm {
        RegisterForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            age: self.age.get_untracked(),
            birth_day: self.birth_day.get_untracked(),
            birth_month: self.birth_month.get_untracked(),
        }
    }

    /// Refills the fields when the user comes back from the code page.
    pub fn restore(&self, draft: &RegistrationDraft) {
        self.first_name.set(draft.first_name.clone());
        self.last_name.set(draft.last_name.clone());
        self.email.set(draft.email.clone());
        self.age.set(draft.age.to_string());
        self.birth_day.set(draft.birth_day.to_string());
        self.birth_month.set(draft.birth_month.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<String>>,
    pub submit_action: Action<RegistrationDraft, Result<RegistrationDraft, FlowError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match RegistrationDraft::from_form(&self.form.snapshot()) {
            Ok(draft) => {
                self.error.set(None);
                self.submit_action.dispatch(draft);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RegisterRepository::new_with_client(Rc::new(api));
    let flow = use_flow_context();
    let caps = use_capabilities();

    let form = RegisterFormState::default();
    if let Some(draft) = flow.draft_snapshot() {
        form.restore(&draft);
    }
    let error = create_rw_signal(None::<String>);

    let submit_action = create_action(move |draft: &RegistrationDraft| {
        let repo = repository.clone();
        let draft = draft.clone();
        async move {
            repo.request_code(&draft.email).await?;
            Ok::<_, FlowError>(draft)
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(draft) => {
                    error.set(None);
                    flow.store_draft(draft);
                    caps.navigator.navigate(VERIFY_PATH);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        submit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::testing::provide_test_capabilities;
    use crate::test_support::ssr::with_runtime;

    fn fill(form: &RegisterFormState) {
        form.first_name.set("Ada".into());
        form.last_name.set("Lovelace".into());
        form.email.set("ada@example.com".into());
        form.password.set("analytical".into());
        form.confirm_password.set("analytical".into());
        form.age.set("36".into());
        form.birth_day.set("10".into());
        form.birth_month.set("12".into());
    }

    #[test]
    fn invalid_form_is_reported_without_request() {
        with_runtime(|| {
            provide_test_capabilities();
            let vm = use_register_view_model();
            fill(&vm.form);
            vm.form.confirm_password.set("different".into());

            vm.submit();

            assert_eq!(vm.error.get_untracked().as_deref(), Some("Passwords do not match"));
            assert_eq!(vm.submit_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn existing_draft_refills_the_form_without_password() {
        with_runtime(|| {
            provide_test_capabilities();
            let probe = RegisterFormState::default();
            fill(&probe);
            let draft = RegistrationDraft::from_form(&probe.snapshot()).unwrap();
            use_flow_context().store_draft(draft);

            let vm = use_register_view_model();

            assert_eq!(vm.form.email.get_untracked(), "ada@example.com");
            assert_eq!(vm.form.birth_month.get_untracked(), "12");
            assert!(vm.form.password.get_untracked().is_empty());
        });
    }
}
