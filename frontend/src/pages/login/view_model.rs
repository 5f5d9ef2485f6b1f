use super::utils::LoginFormState;
use crate::{
    api::{ApiError, LoginRequest},
    config,
    state::session::{self, use_capabilities},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = session::use_login_action();
    let caps = use_capabilities();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.password.set(String::new());
                    caps.navigator.navigate(&config::flow_settings().landing_path);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::testing::provide_test_capabilities;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            provide_test_capabilities();
            let vm = use_login_view_model();
            assert!(vm.error.get_untracked().is_none());
            assert!(vm.form.email.get_untracked().is_empty());
        });
    }

    #[test]
    fn invalid_email_is_reported_without_dispatch() {
        with_runtime(|| {
            provide_test_capabilities();
            let vm = use_login_view_model();
            vm.form.email.set("ada".into());
            vm.submit();
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Please enter a valid email address")
            );
            assert_eq!(vm.login_action.version().get_untracked(), 0);
        });
    }
}
