//! HTTP client setup.
//!
//! The client carries the fixed headers the dataset API expects on every
//! request (`Accept: file` and the client user agent) and a tracing
//! middleware. It never retries: one invocation performs one attempt.
//!
//! # Examples
//!
//! ```rust
//! use kdataset::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Proxy,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Value of the `Accept` header sent to the dataset API.
pub const ACCEPT_FILE: &str = "file";

/// User agent identifying the client to the dataset API.
pub const DEFAULT_USER_AGENT: &str = "Swagger-Codegen/1/python";

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent sent with every request.
    pub user_agent: String,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Extra headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
            headers: None,
        }
    }
}

impl HttpClientConfig {
    /// Headers sent with every request: the extra headers, then the fixed
    /// `Accept` and `User-Agent` which always win.
    pub fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.headers.clone().unwrap_or_default();
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| Error::Internal(format!("invalid user agent {:?}: {}", self.user_agent, e)))?;

        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_FILE));
        headers.insert(USER_AGENT, user_agent);
        Ok(headers)
    }
}

/// Creates an HTTP client with tracing middleware and the dataset API
/// default headers.
pub fn create_http_client(config: HttpClientConfig) -> Result<ClientWithMiddleware> {
    let mut inner_client_builder =
        reqwest::Client::builder().default_headers(config.default_headers()?);

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
