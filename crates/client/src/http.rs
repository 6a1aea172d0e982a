use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use shared_types::{AppConfig, AppError};

/// Thin wrapper over `reqwest::Client` bound to one backend.
///
/// Every call returns `Result<T, AppError>`: transport failures become
/// `Network`, non-2xx responses are mapped through
/// [`AppError::from_status`], and undecodable bodies become `Decode`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.api.timeout_secs))
            .build()
            .unwrap_or_default();
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Self::with_http(http, config.api_base())
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST a body and ignore whatever the backend answers with.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        self.post::<B, IgnoredAny>(path, body).await.map(|_| ())
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        self.send::<IgnoredAny>(self.request(Method::POST, path))
            .await
            .map(|_| ())
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        self.put::<B, IgnoredAny>(path, body).await.map(|_| ())
    }

    pub(crate) async fn put_empty(&self, path: &str) -> Result<(), AppError> {
        self.send::<IgnoredAny>(self.request(Method::PUT, path))
            .await
            .map(|_| ())
    }

    pub(crate) async fn patch_empty(&self, path: &str) -> Result<(), AppError> {
        self.send::<IgnoredAny>(self.request(Method::PATCH, path))
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send::<IgnoredAny>(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed to send");
            AppError::network(e.to_string())
        })?;

        let status = response.status();
        let url = response.url().path().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path = %url, "backend returned an error");
            return Err(AppError::from_status(status.as_u16(), &body));
        }

        tracing::debug!(status = status.as_u16(), path = %url, bytes = body.len(), "response");

        let text = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, path = %url, "could not decode response body");
            AppError::decode(e.to_string())
        })
    }
}
