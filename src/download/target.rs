//! Output path resolution.
//!
//! The file name comes from the caller when given, otherwise from the
//! `Content-Disposition` header, otherwise it falls back to
//! [`FALLBACK_FILENAME`]. An existing file at the resolved path is
//! overwritten without notice.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// File name used when neither the caller nor the server names the file.
pub const FALLBACK_FILENAME: &str = "dataset.downloaded";

static DISPOSITION_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename="?([\w.\-]+)"#).expect("filename regex is valid") // Static pattern, safe to panic
});

/// Extract the file name suggested by a `Content-Disposition` header value.
///
/// ```rust
/// use kdataset::download::filename_from_disposition;
///
/// assert_eq!(
///     filename_from_disposition("attachment; filename=wine-reviews.zip"),
///     Some("wine-reviews.zip")
/// );
/// assert_eq!(filename_from_disposition("inline"), None);
/// ```
pub fn filename_from_disposition(disposition: &str) -> Option<&str> {
    DISPOSITION_FILENAME
        .captures(disposition)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Final location of the downloaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    directory: PathBuf,
    filename: String,
}

impl Target {
    /// Resolve the output location.
    ///
    /// `directory` defaults to an empty prefix, which makes the path relative
    /// to the current working directory.
    pub fn resolve(
        directory: Option<&Path>,
        filename: Option<&str>,
        disposition: Option<&str>,
    ) -> Self {
        let filename = filename
            .or_else(|| disposition.and_then(filename_from_disposition))
            .unwrap_or(FALLBACK_FILENAME);

        Self {
            directory: directory.map(Path::to_path_buf).unwrap_or_default(),
            filename: filename.to_string(),
        }
    }

    /// Get the output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get the output file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Full path of the output file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}
