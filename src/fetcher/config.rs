//! Configuration of the dataset fetcher.

use crate::http::HttpClientConfig;
use crate::progress::ProgressBarOpts;

/// Default root of the dataset service.
pub const DEFAULT_ENDPOINT: &str = "https://www.kaggle.com";

/// Default API root, relative to the endpoint.
pub const DEFAULT_API_VERSION: &str = "api/v1";

/// Default size of the chunks written to disk.
pub const DEFAULT_CHUNK_SIZE: usize = 2048;

/// Configuration structure for the fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Root URL of the dataset service.
    pub endpoint: String,
    /// API root, relative to the endpoint.
    pub api_version: String,
    /// Maximum size of a single write to the output file.
    pub chunk_size: usize,
    /// HTTP client configuration.
    pub http: HttpClientConfig,
    /// Progress bar options.
    pub progress: ProgressBarOpts,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            http: HttpClientConfig::default(),
            progress: ProgressBarOpts::default(),
        }
    }
}
