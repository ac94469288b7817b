//! Builder for [`DatasetFetcher`] instances.
//!
//! ```rust
//! use kdataset::fetcher::FetcherBuilder;
//!
//! let fetcher = FetcherBuilder::hidden()
//!     .endpoint("http://127.0.0.1:8080")
//!     .chunk_size(4096)
//!     .build();
//! assert_eq!(fetcher.endpoint(), "http://127.0.0.1:8080");
//! ```

use super::{config::FetcherConfig, fetcher::DatasetFetcher};
use crate::progress::ProgressBarOpts;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Proxy;

/// A builder used to create a [`DatasetFetcher`].
#[derive(Debug, Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        FetcherBuilder::default().progress(ProgressBarOpts::hidden())
    }

    /// Set the root URL of the dataset service.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the API root, relative to the endpoint.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = api_version.into();
        self
    }

    /// Set the user agent sent to the service.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.http.user_agent = user_agent.into();
        self
    }

    /// Set the maximum size of a single write to the output file.
    ///
    /// A size of zero is treated as one.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size.max(1);
        self
    }

    /// Route the request through a proxy.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.http.proxy = Some(proxy);
        self
    }

    /// Set the progress bar options.
    pub fn progress(mut self, progress: ProgressBarOpts) -> Self {
        self.config.progress = progress;
        self
    }

    /// Add extra http headers.
    ///
    /// `Accept` and `User-Agent` are fixed by the fetcher and cannot be
    /// overridden here.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config
            .http
            .headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    /// Add an extra http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config
            .http
            .headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    /// Create the [`DatasetFetcher`] with the specified options.
    pub fn build(self) -> DatasetFetcher {
        DatasetFetcher::new(self.config)
    }
}
