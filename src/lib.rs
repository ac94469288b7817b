//! kdataset downloads a single Kaggle dataset archive with the account's API
//! token and optionally verifies it against the MD5 advertised by the server.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kdataset::{Credentials, DownloadRequest, Error, FetcherBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let request = DownloadRequest::new(
//!     "https://www.kaggle.com/zynicide/wine-reviews",
//!     Credentials::new("alice", "0123456789abcdef"),
//! )
//! .directory("datasets")
//! .check_md5(true);
//!
//! let summary = FetcherBuilder::new().build().download(&request).await?;
//! if summary.is_success() {
//!     println!("downloading successfully.");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - Requests, locators, targets, MD5 verification and outcomes
//! - [`fetcher`] - The [`DatasetFetcher`] and its [`FetcherBuilder`]
//! - [`error`] - Centralized error handling with the [`Error`] enum
//! - [`http`] - HTTP client setup and response metadata
//! - [`progress`] - Progress bar styling and display

pub mod download;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod progress;

pub use download::{Credentials, DownloadRequest, Locator, Outcome, Summary, Target};
pub use error::{Error, Result};
pub use fetcher::{DatasetFetcher, FetcherBuilder, FetcherConfig};
pub use http::{create_http_client, HttpClientConfig, ResponseMetadata};
pub use progress::ProgressBarOpts;
