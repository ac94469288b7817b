//! The description of one dataset download.
//!
//! # Examples
//!
//! ```rust
//! use kdataset::download::{Credentials, DownloadRequest};
//!
//! let request = DownloadRequest::new(
//!     "https://www.kaggle.com/zynicide/wine-reviews",
//!     Credentials::new("alice", "0123456789abcdef"),
//! )
//! .directory("datasets")
//! .filename("wine.zip")
//! .check_md5(true);
//!
//! assert_eq!(request.locator()?.dataset(), "wine-reviews");
//! # Ok::<(), kdataset::Error>(())
//! ```

use super::locator::Locator;
use crate::error::Result;

use std::fmt;
use std::path::{Path, PathBuf};

/// Account name and API token used for HTTP basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    key: String,
}

impl Credentials {
    /// Create new [`Credentials`].
    pub fn new(user: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            key: key.into(),
        }
    }

    /// Get the account name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Get the API token.
    pub fn key(&self) -> &str {
        &self.key
    }
}

// The token never shows up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("key", &"***")
            .finish()
    }
}

/// Everything one invocation needs to know about the dataset to download.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Dataset page URL.
    url: String,
    /// Credentials of the account.
    credentials: Credentials,
    /// Output directory, the current directory when missing.
    directory: Option<PathBuf>,
    /// Output file name, taken from the response when missing.
    filename: Option<String>,
    /// Verify the written file against the advertised MD5.
    check_md5: bool,
}

impl DownloadRequest {
    /// Create a new [`DownloadRequest`] saving to the current directory under
    /// the name suggested by the server, without checksum verification.
    pub fn new(url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            url: url.into(),
            credentials,
            directory: None,
            filename: None,
            check_md5: false,
        }
    }

    /// Set the output directory.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set the output file name, overriding the one suggested by the server.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Enable or disable MD5 verification.
    pub fn check_md5(mut self, check_md5: bool) -> Self {
        self.check_md5 = check_md5;
        self
    }

    /// Split a caller supplied file path into output directory and file name.
    ///
    /// An empty parent (`"data.zip"`) leaves the directory unset. A path
    /// ending in a separator (`"out/"`) names only the directory, so the file
    /// name still comes from the response.
    pub fn filepath(mut self, filepath: &Path) -> Self {
        if filepath
            .to_string_lossy()
            .ends_with(std::path::is_separator)
        {
            self.directory = Some(filepath.to_path_buf());
            return self;
        }
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.directory = Some(parent.to_path_buf());
        }
        if let Some(name) = filepath.file_name() {
            self.filename = Some(name.to_string_lossy().into_owned());
        }
        self
    }

    /// Get the dataset page URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the output directory, if any.
    pub fn output_directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Get the output file name, if any.
    pub fn output_filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Whether MD5 verification is requested.
    pub fn verifies_md5(&self) -> bool {
        self.check_md5
    }

    /// Parse the dataset page URL.
    pub fn locator(&self) -> Result<Locator> {
        Locator::parse(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.kaggle.com/owner/dataset";

    fn credentials() -> Credentials {
        Credentials::new("user", "secret-token")
    }

    #[test]
    fn test_request_defaults() {
        let request = DownloadRequest::new(URL, credentials());
        assert_eq!(request.url(), URL);
        assert!(request.output_directory().is_none());
        assert!(request.output_filename().is_none());
        assert!(!request.verifies_md5());
    }

    #[test]
    fn test_filepath_with_directory() {
        let request = DownloadRequest::new(URL, credentials()).filepath(Path::new("out/data.zip"));
        assert_eq!(request.output_directory(), Some(Path::new("out")));
        assert_eq!(request.output_filename(), Some("data.zip"));
    }

    #[test]
    fn test_filepath_with_trailing_separator() {
        let request = DownloadRequest::new(URL, credentials()).filepath(Path::new("out/"));
        assert_eq!(request.output_directory(), Some(Path::new("out/")));
        assert!(request.output_filename().is_none());

        let request =
            DownloadRequest::new(URL, credentials()).filepath(Path::new("datasets/wine/"));
        assert_eq!(request.output_directory(), Some(Path::new("datasets/wine")));
        assert!(request.output_filename().is_none());
    }

    #[test]
    fn test_filepath_without_directory() {
        let request = DownloadRequest::new(URL, credentials()).filepath(Path::new("data.zip"));
        assert!(request.output_directory().is_none());
        assert_eq!(request.output_filename(), Some("data.zip"));
    }

    #[test]
    fn test_credentials_debug_hides_key() {
        let debug_str = format!("{:?}", credentials());
        assert!(debug_str.contains("user"));
        assert!(!debug_str.contains("secret-token"));
    }

    #[test]
    fn test_locator_from_request() {
        let request = DownloadRequest::new(URL, credentials());
        let locator = request.locator().unwrap();
        assert_eq!(locator.owner(), "owner");
        assert_eq!(locator.dataset(), "dataset");
    }
}
