use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::{
    api::{normalize, types::ApiError},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url().path());

        #[cfg(test)]
        {
            if let Some(responder) = find_mock(request.url().as_str()) {
                return responder.respond(&request).map(MockResponse::into_response);
            }
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    /// POSTs `body` as JSON under the API base and returns the status with a leniently parsed body.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, Value), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}{}", base_url, path))
                    .json(body),
            )
            .await?;
        read_body(response).await
    }
}

pub(crate) async fn read_body(response: Response) -> Result<(StatusCode, Value), ApiError> {
    let status = response.status();
    let raw = response
        .text()
        .await
        .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
    Ok((status, normalize::parse_lenient(&raw)))
}

/// Turns a non-2xx status into an [`ApiError`], passing the body through otherwise.
pub(crate) fn ensure_success(status: StatusCode, body: Value) -> Result<Value, ApiError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(normalize::error_from_body(status, &body))
    }
}

#[cfg(test)]
pub use mock_hooks::*;
