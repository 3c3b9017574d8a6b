//! Injected HTTP capability for the use-case layer.
//!
//! Use-cases depend on [`HttpAdapter`] rather than a concrete transport so
//! they can be exercised against a fake in tests. [`ReqwestAdapter`] is the
//! production implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

/// REST capability consumed by every use-case: one method per verb, each
/// returning a parsed JSON-shaped result or an error.
#[async_trait]
pub trait HttpAdapter: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, ClientError>;

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>;

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>;

    async fn delete(&self, path: &str) -> Result<(), ClientError>;
}

/// Production adapter over [`reqwest`].
///
/// Holds the API base URL and an optional bearer token; the underlying
/// `reqwest::Client` pools connections across calls.
pub struct ReqwestAdapter {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ReqwestAdapter {
    /// Create an adapter for the given base URL (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Return a copy of this adapter that authenticates with `token`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer_token: Some(token.into()),
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Check the status and parse the body, surfacing non-2xx responses as
    /// [`ClientError::Api`] with the raw body for debugging.
    ///
    /// An empty body (204 No Content) parses as JSON `null`, so callers of
    /// no-body endpoints can ask for `serde_json::Value` or `Option<T>`.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HttpAdapter for ReqwestAdapter {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::parse(response).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::check_status(response).await
    }
}
