//! HTTP module containing the client setup and response inspection.
//!
//! - [`client`] - HTTP client creation with the dataset API default headers
//! - [`response`] - [`ResponseMetadata`], the header values a download consumes

pub mod client;
pub mod response;

pub use client::{create_http_client, HttpClientConfig, ACCEPT_FILE, DEFAULT_USER_AGENT};
pub use response::{ResponseMetadata, X_GOOG_HASH};
