//! Main LabDeskClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// The client for the lab works REST backend.
///
/// Clones share one connection pool and configuration, so a client can be
/// handed to every page.
///
/// # Example
///
/// ```ignore
/// use labdesk_lib::LabDeskClient;
///
/// let client = LabDeskClient::builder()
///     .url("http://localhost:8080/api")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let works: Vec<LabWork> = client.list(Resource::LabWorks).await?;
/// ```
#[derive(Clone)]
pub struct LabDeskClient {
    inner: Arc<LabDeskClientInner>,
}

struct LabDeskClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for LabDeskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabDeskClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl LabDeskClient {
    /// Starts building a client. The base URL is required.
    pub fn builder() -> LabDeskClientBuilder<Missing> {
        LabDeskClientBuilder::new()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Resolves a path such as `/labworks/3` against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.inner.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Sends a request and maps non-success statuses to [`ApiError::Http`]
    /// built from the backend's error envelope.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<reqwest::Response, Error> {
        log::debug!("{} {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method.clone(), url.clone())
            .headers(self.default_headers());

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            let err = match ApiError::from(e) {
                ApiError::Timeout(_) => ApiError::Timeout(self.inner.timeout.unwrap_or_default()),
                other => other,
            };
            log::warn!("{} {} failed: {}", method, url, err);
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_body(status.as_u16(), &body);
        log::warn!("{} {} returned {}", method, url, err);
        Err(Error::Api(err))
    }

    /// Reads the response body and deserializes it as JSON.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let body = response.text().await.map_err(ApiError::from)?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Api(ApiError::parse_with_body(e.to_string(), body)))
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Builder state: base URL not given yet.
pub struct Missing;

/// Builder state: base URL given.
pub struct Set<T>(T);

/// Builder for constructing a [`LabDeskClient`].
///
/// Uses the typestate pattern so that `build` is only available once the base
/// URL has been provided.
pub struct LabDeskClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl LabDeskClientBuilder<Missing> {
    /// Builder with no timeouts and a default HTTP client.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the backend base URL, e.g. `http://localhost:8080/api`.
    pub fn url(self, url: impl Into<String>) -> LabDeskClientBuilder<Set<String>> {
        LabDeskClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for LabDeskClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> LabDeskClientBuilder<U> {
    /// Per-request timeout, covering connect, send and body download.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// TCP connect timeout. Ignored when a custom HTTP client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Uses an existing `reqwest` client, e.g. one with a proxy configured.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl LabDeskClientBuilder<Set<String>> {
    /// Builds the [`LabDeskClient`].
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be created.
    pub fn build(self) -> Result<LabDeskClient, Error> {
        let base_url = self.url.0;
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::Network)?
            }
        };

        Ok(LabDeskClient {
            inner: Arc::new(LabDeskClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
