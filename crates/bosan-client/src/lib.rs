pub mod cache;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::cache::QueryCache;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch-and-cache client for the BOSAN API.
///
/// Reads bind a cache key — the route path — to a GET and serve the cached
/// value until something invalidates it; mutations issue their verb and
/// mark the related keys stale so the next read refetches. The session
/// cookie set by `/api/login` rides along in the underlying cookie store.
pub struct QueryClient {
    http: Client,
    base_url: String,
    cache: QueryCache,
}

impl QueryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            cache: QueryCache::new(),
        })
    }

    /// Cached read. A hit skips the network entirely.
    pub async fn query<T: DeserializeOwned>(&self, key: &str) -> Result<T, ClientError> {
        if let Some(value) = self.cache.get_fresh(key) {
            debug!("Cache hit for {}", key);
            return Ok(serde_json::from_value(value)?);
        }

        let value = self.request(Method::GET, key, None).await?;
        self.cache.store(key, value.clone());
        Ok(serde_json::from_value(value)?)
    }

    /// Write: on success every key in `invalidates` goes stale.
    pub async fn mutate<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        invalidates: &[&str],
    ) -> Result<T, ClientError> {
        let value = self.request(method, path, body).await?;
        for key in invalidates {
            self.cache.invalidate(key);
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn invalidate(&self, key: &str) {
        self.cache.invalidate(key);
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await?;
        let status = res.status();
        if !status.is_success() {
            // Error bodies are `{"error": ...}`; fall back to the status
            // line when there is no parseable body.
            let message = res
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res.json().await?)
    }
}
