//! Marketplace API call executor.
//!
//! Every request carries the bearer token and an `Accept` header for text or
//! JSON. POST bodies are sent as JSON. Successful responses are returned as
//! raw text; anything with status 400 or above becomes [`ApiError::Api`].

use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// `Accept` header sent with every request.
pub const ACCEPT: &str = "text/plain, application/json";

/// Marketplace API client.
#[derive(Clone)]
pub struct AuroraClient {
    inner: Arc<AuroraClientInner>,
}

struct AuroraClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl AuroraClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", config.bearer_token()))?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(AuroraClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Execute a GET request and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for status >= 400, `ApiError::Http` if the
    /// request could not be sent.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        debug!("Sending GET");
        let response = self.inner.client.get(&url).send().await?;
        handle_response(response).await
    }

    /// Execute a POST request with a JSON body and return the raw response
    /// body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for status >= 400, `ApiError::Http` if the
    /// request could not be sent.
    #[instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        debug!("Sending POST");
        let response = self.inner.client.post(&url).json(body).send().await?;
        handle_response(response).await
    }
}

impl std::fmt::Debug for AuroraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuroraClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Read the body and map status >= 400 to an API failure.
async fn handle_response(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if status.as_u16() >= 400 {
        warn!(status = status.as_u16(), "API returned an error");
        return Err(ApiError::Api {
            status: status.as_u16(),
            body,
        });
    }

    debug!(status = status.as_u16(), bytes = body.len(), "API call succeeded");
    Ok(body)
}
