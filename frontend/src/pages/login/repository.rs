use crate::api::{ApiClient, ApiError, AuthResponse, LoginRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.login(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn login_posts_credentials() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "tokens": { "AccessToken": "a", "RefreshToken": "b" }
            }));
        });
        let repo =
            LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))));

        let response = repo
            .login(&LoginRequest {
                email: "ada@example.com".into(),
                password: "analytical".into(),
            })
            .await
            .unwrap();

        assert!(response.tokens.is_some());
        assert_eq!(
            server.last_body("/api/auth/login"),
            Some(serde_json::json!({ "email": "ada@example.com", "password": "analytical" }))
        );
    }

    #[tokio::test]
    async fn wrong_password_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(serde_json::json!({ "message": "Invalid credentials" }));
        });
        let repo =
            LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))));

        let err = repo
            .login(&LoginRequest {
                email: "ada@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Invalid credentials");
    }
}
