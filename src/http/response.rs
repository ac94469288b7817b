//! Read-only view over the response headers the fetcher cares about.

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_LENGTH};
use reqwest::{Response, StatusCode};

/// Header carrying the digests of the served object.
pub const X_GOOG_HASH: &str = "x-goog-hash";

/// Status and header values of a dataset download response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    status: StatusCode,
    content_disposition: Option<String>,
    content_hash: Option<String>,
    content_length: Option<u64>,
}

impl ResponseMetadata {
    /// Build the metadata from a status and a header map.
    ///
    /// Header values that are not visible ASCII are treated as missing.
    pub fn new(status: StatusCode, headers: &HeaderMap) -> Self {
        let text = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };

        Self {
            status,
            content_disposition: text(CONTENT_DISPOSITION.as_str()),
            content_hash: text(X_GOOG_HASH),
            content_length: text(CONTENT_LENGTH.as_str()).and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Build the metadata of a response without consuming its body.
    pub fn from_response(response: &Response) -> Self {
        Self::new(response.status(), response.headers())
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the reason phrase of the status code.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }

    /// Whether the status is below 400.
    ///
    /// A 3xx status only reaches this point when the client did not follow
    /// it, e.g. a redirect without `Location`; its body is kept.
    pub fn is_ok(&self) -> bool {
        self.status.as_u16() < 400
    }

    /// Get the `Content-Disposition` header value.
    pub fn content_disposition(&self) -> Option<&str> {
        self.content_disposition.as_deref()
    }

    /// Get the `x-goog-hash` header value.
    pub fn content_hash(&self) -> Option<&str> {
        self.content_hash.as_deref()
    }

    /// Get the `Content-Length` header value.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }
}
