use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    otp::sequencer::LOGIN_PATH,
    pages::login::repository::LoginRepository,
    utils::{
        navigation::{BrowserNavigator, Navigator},
        speech::{Announcer, SpeechAnnouncer},
        storage::{default_token_store, TokenStore},
    },
};
use leptos::*;
use std::rc::Rc;

/// Browser facilities shared by every page. Tests provide in-memory versions.
#[derive(Clone)]
pub struct Capabilities {
    pub store: Rc<dyn TokenStore>,
    pub navigator: Rc<dyn Navigator>,
    pub announcer: Rc<dyn Announcer>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            store: default_token_store(),
            navigator: Rc::new(BrowserNavigator),
            announcer: Rc::new(SpeechAnnouncer),
        }
    }
}

pub fn use_capabilities() -> Capabilities {
    use_context::<Capabilities>().unwrap_or_default()
}

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
}

impl SessionState {
    pub fn from_store(store: &dyn TokenStore) -> Self {
        Self {
            is_authenticated: store.has_session(),
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let caps = use_capabilities();
    let ctx = create_signal(SessionState::from_store(caps.store.as_ref()));
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let caps = use_capabilities();
        create_signal(SessionState::from_store(caps.store.as_ref()))
    })
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    store: &dyn TokenStore,
    set_session: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    let response = repo.login(&request).await?;
    let tokens = response
        .tokens
        .ok_or_else(|| ApiError::unknown("Login response did not include a session"))?;
    store.save(&tokens).map_err(ApiError::unknown)?;
    set_session.set(SessionState {
        is_authenticated: true,
    });
    log::info!("signed in");
    Ok(())
}

/// Drops the stored tokens and returns to the login page.
pub fn logout(caps: &Capabilities, set_session: WriteSignal<SessionState>) {
    caps.store.clear();
    set_session.set(SessionState::default());
    log::info!("signed out");
    caps.navigator.navigate(LOGIN_PATH);
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let caps = use_capabilities();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        let store = caps.store.clone();
        async move { login_request(payload, &repo, store.as_ref(), set_session).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_session, set_session) = use_session();
    let caps = use_capabilities();
    Callback::new(move |_| logout(&caps, set_session))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::testing::provide_test_capabilities;
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::SessionTokens;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn session_reflects_stored_tokens() {
        with_runtime(|| {
            let caps = provide_test_capabilities();
            let (session, _) = use_session();
            assert!(!session.get_untracked().is_authenticated);

            caps.store
                .save(&SessionTokens {
                    access_token: "a".into(),
                    refresh_token: "b".into(),
                })
                .unwrap();
            let (session, _) = use_session();
            assert!(session.get_untracked().is_authenticated);
        });
    }

    #[test]
    fn logout_clears_tokens_and_returns_to_login() {
        with_runtime(|| {
            let test_caps = provide_test_capabilities();
            test_caps
                .store
                .save(&SessionTokens {
                    access_token: "a".into(),
                    refresh_token: "b".into(),
                })
                .unwrap();
            let (session, set_session) = use_session();

            logout(&use_capabilities(), set_session);

            assert!(!test_caps.store.has_session());
            assert!(!session.get_untracked().is_authenticated);
            assert_eq!(test_caps.navigator.visited(), vec!["/login"]);
        });
    }

    #[tokio::test]
    async fn login_stores_tokens_and_marks_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "tokens": { "AccessToken": "access", "RefreshToken": "refresh" }
            }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState::default());
        let store = crate::utils::storage::MemoryTokenStore::default();
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        login_request(
            LoginRequest {
                email: "ada@example.com".into(),
                password: "analytical".into(),
            },
            &repo,
            &store,
            set_session,
        )
        .await
        .unwrap();

        assert!(session.get_untracked().is_authenticated);
        assert_eq!(
            store.get(crate::utils::storage::ACCESS_TOKEN_KEY).as_deref(),
            Some("access")
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_without_tokens_is_an_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({ "message": "ok" }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState::default());
        let store = crate::utils::storage::MemoryTokenStore::default();
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let err = login_request(
            LoginRequest {
                email: "ada@example.com".into(),
                password: "analytical".into(),
            },
            &repo,
            &store,
            set_session,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ApiError::UNKNOWN);
        assert!(!session.get_untracked().is_authenticated);
        assert!(!store.has_session());
        runtime.dispose();
    }
}
