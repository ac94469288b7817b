//! Error handling for the kdataset library.
//!
//! Every fatal condition of a download invocation maps onto one variant of
//! [`Error`]. Conditions that are reported rather than raised (a non-OK HTTP
//! status, a checksum mismatch) live in [`crate::download::Outcome`] instead.

use std::io;
use thiserror::Error;

/// Errors that abort a dataset download.
#[derive(Error, Debug)]
pub enum Error {
    /// The source URL is not a dataset page URL.
    ///
    /// Raised before any network traffic happens.
    #[error("Invalid dataset URL: {0}")]
    InvalidLocator(String),

    /// Failure of the HTTP transport.
    ///
    /// Covers connection refusal, TLS failures, timeouts and errors while
    /// reading the response body. The request is never retried.
    #[error("Transport error")]
    Transport {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Failure while writing or re-reading the output file.
    ///
    /// Whatever was already written stays on disk.
    #[error("Storage error")]
    Storage {
        #[from]
        source: io::Error,
    },

    /// Invalid configuration detected at runtime, such as a user agent that
    /// is not a valid header value.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Transport {
            source: source.into(),
        }
    }
}

/// Result type alias for operations that can fail with a kdataset error.
pub type Result<T> = std::result::Result<T, Error>;
