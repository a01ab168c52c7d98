//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// Public endpoint of the Art Institute of Chicago collection API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// The client for the artwork collection API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks safely. It sends no authentication headers and performs no
/// retries; a failed request is reported once to the caller.
///
/// # Example
///
/// ```ignore
/// use artic_lib::ArticClient;
///
/// let client = ArticClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.fetch_artworks(1, 12).await?;
/// ```
#[derive(Clone)]
pub struct ArticClient {
    pub(crate) inner: Arc<ArticClientInner>,
}

pub(crate) struct ArticClientInner {
    pub(crate) base_url: Url,
    pub(crate) http_client: Client,
    pub(crate) timeout: Option<Duration>,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Creates a client for the public endpoint with default settings.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Returns the base URL of the collection API.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

impl std::fmt::Debug for ArticClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing an [`ArticClient`].
///
/// Every field has a default, so `ArticClient::builder().build()` talks to
/// [`DEFAULT_BASE_URL`] with reqwest's default timeouts.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .base_url("http://localhost:8080/api/v1")
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<Client>,
}

impl ArticClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Sets the API base URL (everything before `/artworks`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client, so it is ignored if a
    /// custom client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArticClient`].
    ///
    /// Fails if the base URL does not parse or cannot carry path segments, or
    /// if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ArticClient, Error> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(self.base_url).into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                if let Some(agent) = self.user_agent {
                    builder = builder.user_agent(agent);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
