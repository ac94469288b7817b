//! Fetcher module containing the download pipeline, its builder and its
//! configuration.
//!
//! - `fetcher` - [`DatasetFetcher`], the request/write/verify sequence
//! - `builder` - [`FetcherBuilder`] for configuring a fetcher
//! - `config` - [`FetcherConfig`] and its defaults
//! - `writer` - Chunked streaming of a response body to disk

pub mod builder;
pub mod config;
pub mod fetcher;
pub mod writer;

pub use builder::FetcherBuilder;
pub use config::{FetcherConfig, DEFAULT_API_VERSION, DEFAULT_CHUNK_SIZE, DEFAULT_ENDPOINT};
pub use fetcher::DatasetFetcher;
pub use writer::write_stream;
