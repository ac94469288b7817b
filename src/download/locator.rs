//! Dataset page URL parsing.
//!
//! A dataset page lives at `https://www.kaggle.com/<owner>/<dataset>`. The
//! scheme is optional and anything may follow the dataset segment once a
//! `/`, `?` or `#` separates it, so links to a dataset's sub pages resolve to
//! the same dataset.
//!
//! ```rust
//! use kdataset::download::Locator;
//!
//! let locator = Locator::parse("https://www.kaggle.com/zynicide/wine-reviews")?;
//! assert_eq!(locator.owner(), "zynicide");
//! assert_eq!(locator.dataset(), "wine-reviews");
//! # Ok::<(), kdataset::Error>(())
//! ```

use crate::error::{Error, Result};

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Host serving the dataset pages.
pub const DATASET_HOST: &str = "www.kaggle.com";

static LOCATOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:https?://)?{}/([A-Za-z0-9_-]+)/([A-Za-z0-9_-]+)(?:[/?#]|$)",
        regex::escape(DATASET_HOST)
    );
    Regex::new(&pattern).expect("locator regex is valid") // Static pattern, safe to panic
});

/// The `(owner, dataset)` identifier pair of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    owner: String,
    dataset: String,
}

impl Locator {
    /// Parse a dataset page URL.
    ///
    /// Fails with [`Error::InvalidLocator`] when the host is wrong, a segment
    /// is missing or a segment contains characters outside `[A-Za-z0-9_-]`.
    pub fn parse(url: &str) -> Result<Self> {
        let captures = LOCATOR_PATTERN
            .captures(url)
            .ok_or_else(|| Error::InvalidLocator(url.to_string()))?;

        Ok(Self {
            owner: captures[1].to_string(),
            dataset: captures[2].to_string(),
        })
    }

    /// Get the owner identifier.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the dataset identifier.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Path of the download API resource for this dataset, relative to the
    /// API root.
    pub fn download_path(&self) -> String {
        format!("datasets/download/{}/{}", self.owner, self.dataset)
    }
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locator::parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.dataset)
    }
}
