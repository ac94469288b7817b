//! Dataset download pipeline.
//!
//! One call to [`DatasetFetcher::download`] walks a single linear sequence:
//! parse the locator, send one authenticated request, resolve the target,
//! stream the body to disk, then optionally verify the MD5 of the written
//! file. It stops at the first failing step and never retries.
//!
//! ```rust,no_run
//! use kdataset::download::{Credentials, DownloadRequest};
//! use kdataset::fetcher::FetcherBuilder;
//!
//! # async fn example() -> Result<(), kdataset::Error> {
//! let fetcher = FetcherBuilder::new().build();
//! let request = DownloadRequest::new(
//!     "https://www.kaggle.com/zynicide/wine-reviews",
//!     Credentials::new("alice", "0123456789abcdef"),
//! )
//! .check_md5(true);
//!
//! let summary = fetcher.download(&request).await?;
//! println!("{}", summary.outcome());
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use super::writer::write_stream;
use crate::download::hash::{decode_md5_token, md5_token_from_hash_header, verify_md5};
use crate::download::{Credentials, DownloadRequest, Locator, Outcome, Summary, Target};
use crate::error::Result;
use crate::http::{create_http_client, ResponseMetadata};
use crate::progress::ProgressDisplay;

use reqwest::Response;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, info, warn};

/// Downloads one dataset archive per call.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// use kdataset::fetcher::FetcherBuilder;
///
/// let fetcher = FetcherBuilder::new().build();
/// assert_eq!(fetcher.chunk_size(), 2048);
/// ```
#[derive(Debug, Clone)]
pub struct DatasetFetcher {
    config: FetcherConfig,
}

impl DatasetFetcher {
    /// Creates a new fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the root URL of the dataset service.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Gets the API root, relative to the endpoint.
    pub fn api_version(&self) -> &str {
        &self.config.api_version
    }

    /// Gets the user agent sent to the service.
    pub fn user_agent(&self) -> &str {
        &self.config.http.user_agent
    }

    /// Gets the maximum size of a single write.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// URL of the download API resource of a dataset.
    pub fn download_url(&self, locator: &Locator) -> String {
        format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.api_version.trim_matches('/'),
            locator.download_path()
        )
    }

    /// Download the dataset described by `request`.
    ///
    /// Invalid locators, transport failures and storage failures abort with
    /// an error. A non-OK status, a checksum mismatch and a skipped checksum
    /// are reported through the [`Outcome`] of the returned [`Summary`].
    pub async fn download(&self, request: &DownloadRequest) -> Result<Summary> {
        let locator = request.locator()?;
        debug!("URL: {}", request.url());

        let client = create_http_client(self.config.http.clone())?;
        let response = self.send(&client, &locator, request.credentials()).await?;

        let metadata = ResponseMetadata::from_response(&response);
        debug!("{} {}", metadata.status().as_u16(), metadata.reason());

        if !metadata.is_ok() {
            warn!(
                "Download of {} refused: {} {}",
                locator,
                metadata.status().as_u16(),
                metadata.reason()
            );
            return Ok(Summary::refused(metadata.status()));
        }

        debug!(
            "Content-Disposition: {}",
            metadata.content_disposition().unwrap_or_default()
        );
        debug!("x-goog-hash: {}", metadata.content_hash().unwrap_or_default());

        let target = Target::resolve(
            request.output_directory(),
            request.output_filename(),
            metadata.content_disposition(),
        );
        let expected = request.verifies_md5().then(|| expected_md5(&metadata));

        let path = target.path();
        let size = self.write(response, &metadata, &target).await?;
        let summary = Summary::written(target, metadata.status(), size);

        let outcome = match expected {
            None => Outcome::Success,
            Some(Err(reason)) => {
                warn!("MD5 check has not been done: {}", reason);
                Outcome::ChecksumSkipped(reason)
            }
            Some(Ok(expected)) => {
                let outcome = verify_md5(&path, &expected).await?;
                match outcome {
                    Outcome::ChecksumMismatch {
                        ref expected,
                        ref actual,
                    } => warn!("MD5 is not correct: expected {}, got {}", expected, actual),
                    _ => info!("MD5 is correct."),
                }
                outcome
            }
        };

        Ok(summary.with_outcome(outcome))
    }

    /// Send the authenticated download request.
    async fn send(
        &self,
        client: &ClientWithMiddleware,
        locator: &Locator,
        credentials: &Credentials,
    ) -> Result<Response> {
        let url = self.download_url(locator);
        debug!("Connecting to {}", url);

        let response = client
            .get(url)
            .basic_auth(credentials.user(), Some(credentials.key()))
            .send()
            .await?;

        Ok(response)
    }

    /// Stream the response body to the target file.
    async fn write(
        &self,
        response: Response,
        metadata: &ResponseMetadata,
        target: &Target,
    ) -> Result<u64> {
        let path = target.path();
        info!("Downloading to {}", path.display());

        let progress = ProgressDisplay::new(&self.config.progress, metadata.content_length());
        progress.set_message(target.filename().to_string());

        let size = write_stream(
            response.bytes_stream(),
            &path,
            self.config.chunk_size,
            &progress,
        )
        .await?;

        progress.finish();
        Ok(size)
    }
}

/// Expected raw MD5 digest advertised by the response, or the reason it is
/// unavailable.
fn expected_md5(metadata: &ResponseMetadata) -> std::result::Result<Vec<u8>, String> {
    let token = metadata
        .content_hash()
        .and_then(md5_token_from_hash_header)
        .ok_or_else(|| "no md5 in x-goog-hash header".to_string())?;
    debug!("md5 (base64): {}", token);

    let digest =
        decode_md5_token(token).ok_or_else(|| format!("md5 token {token:?} is not valid base64"))?;
    debug!("md5: {}", hex::encode(&digest));

    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetcherBuilder;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    fn metadata_with_hash(hash: &'static str) -> ResponseMetadata {
        let mut headers = HeaderMap::new();
        headers.insert("x-goog-hash", hash.parse().unwrap());
        ResponseMetadata::new(StatusCode::OK, &headers)
    }

    #[test]
    fn test_download_url() {
        let locator = Locator::parse("https://www.kaggle.com/owner/dataset").unwrap();

        let fetcher = FetcherBuilder::new().build();
        assert_eq!(
            fetcher.download_url(&locator),
            "https://www.kaggle.com/api/v1/datasets/download/owner/dataset"
        );

        let fetcher = FetcherBuilder::new()
            .endpoint("http://127.0.0.1:9000/")
            .api_version("/api/v2/")
            .build();
        assert_eq!(
            fetcher.download_url(&locator),
            "http://127.0.0.1:9000/api/v2/datasets/download/owner/dataset"
        );
    }

    #[test]
    fn test_expected_md5() {
        let digest = md5::compute(b"");
        let metadata = metadata_with_hash("crc32c=AAAAAA==,md5=1B2M2Y8AsgTpgAmY7PhCfg==");
        assert_eq!(expected_md5(&metadata), Ok(digest.0.to_vec()));
    }

    #[test]
    fn test_expected_md5_unavailable() {
        let metadata = ResponseMetadata::new(StatusCode::OK, &HeaderMap::new());
        assert!(expected_md5(&metadata).is_err());

        let metadata = metadata_with_hash("crc32c=AAAAAA==");
        assert!(expected_md5(&metadata).is_err());

        let metadata = metadata_with_hash("md5=not=base64");
        assert!(expected_md5(&metadata).is_err());
    }

    #[tokio::test]
    async fn test_invalid_locator_needs_no_network() {
        let fetcher = FetcherBuilder::hidden()
            .endpoint("http://127.0.0.1:1")
            .build();
        let request = DownloadRequest::new(
            "https://example.com/owner/dataset",
            Credentials::new("user", "key"),
        );

        let result = fetcher.download(&request).await;
        assert!(matches!(result, Err(crate::Error::InvalidLocator(_))));
    }
}
