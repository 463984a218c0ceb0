//! HTTP client for the petlog backend.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{ApiError, ApiResult};
use crate::config::ClientConfig;
use crate::models::ItemEnvelope;

/// Message used when an error response carries no `detail`.
const FALLBACK_DETAIL: &str = "API request failed";

/// JSON client for the petlog REST backend.
///
/// Resource operations live next to their models: see `pets.rs`,
/// `vet_visits.rs`, `weights.rs`, `medications.rs` and `records.rs`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured backend.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.fetch(Method::GET, path, self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        self.fetch(Method::GET, path, builder).await
    }

    /// GET a `{ "item": ... }` envelope and unwrap it.
    pub(crate) async fn get_item<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let envelope: ItemEnvelope<T> = self.get(path).await?;
        Ok(envelope.item)
    }

    /// POST a JSON body and decode the bare response.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.fetch(Method::POST, path, builder).await
    }

    /// PUT a JSON body and decode the bare response.
    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.fetch(Method::PUT, path, builder).await
    }

    /// POST a JSON body and unwrap the `{ "item": ... }` response.
    pub(crate) async fn post_item<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        let envelope: ItemEnvelope<T> = self.fetch(Method::POST, path, builder).await?;
        Ok(envelope.item)
    }

    /// PUT a JSON body and unwrap the `{ "item": ... }` response.
    pub(crate) async fn put_item<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        let envelope: ItemEnvelope<T> = self.fetch(Method::PUT, path, builder).await?;
        Ok(envelope.item)
    }

    /// DELETE a resource. Any 2xx (normally 204 with no body) is success.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        debug!(method = "DELETE", path, status = status.as_u16(), "api response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        Ok(())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(method = %method, path, status = status.as_u16(), "api response");

        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        // 204 carries no body; let `T` decide whether null is acceptable.
        let body = if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            "null"
        } else {
            body.as_str()
        };
        serde_json::from_str(body)
            .map_err(|e| ApiError::Decode(format!("{} {}: {}", method, path, e)))
    }
}

/// Build an [`ApiError::Api`] from an error response body.
pub(crate) fn api_error(status: StatusCode, body: &str) -> ApiError {
    ApiError::Api {
        status: status.as_u16(),
        detail: error_detail(body),
    }
}

/// Extract the backend's `detail` message from an error body.
///
/// Non-string details (validation error lists) are returned as JSON text.
pub(crate) fn error_detail(body: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return FALLBACK_DETAIL.to_string(),
    };

    match value.get("detail") {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(serde_json::Value::Null) | None => FALLBACK_DETAIL.to_string(),
        Some(serde_json::Value::String(_)) => FALLBACK_DETAIL.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_string() {
        assert_eq!(error_detail(r#"{"detail": "Pet not found"}"#), "Pet not found");
    }

    #[test]
    fn test_error_detail_list() {
        let body = r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}]}"#;
        let detail = error_detail(body);
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_error_detail_fallback() {
        assert_eq!(error_detail("<html>502</html>"), FALLBACK_DETAIL);
        assert_eq!(error_detail(r#"{"error": "x"}"#), FALLBACK_DETAIL);
        assert_eq!(error_detail(r#"{"detail": ""}"#), FALLBACK_DETAIL);
    }

    #[test]
    fn test_api_error_from_status() {
        let err = api_error(StatusCode::NOT_FOUND, r#"{"detail": "Vet visit not found"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Vet visit not found");
    }

    #[test]
    fn test_client_trims_base_url() {
        let config = ClientConfig {
            base_url: "http://localhost:8000/api/".into(),
            user_agent: "test".into(),
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }
}
