//! Download module containing the data types of one dataset download.
//!
//! # Overview
//!
//! - [`request`] - The [`DownloadRequest`] and its [`Credentials`]
//! - [`locator`] - Dataset page URL parsing into a [`Locator`]
//! - [`target`] - Output path resolution from caller input and response headers
//! - [`hash`] - MD5 extraction from `x-goog-hash` and file verification
//! - [`summary`] - The [`Summary`] and [`Outcome`] of an invocation
//!
//! # Examples
//!
//! ```rust
//! use kdataset::download::{filename_from_disposition, Locator, Target};
//!
//! let locator = Locator::parse("www.kaggle.com/zynicide/wine-reviews")?;
//! assert_eq!(locator.download_path(), "datasets/download/zynicide/wine-reviews");
//!
//! let target = Target::resolve(None, None, Some("attachment; filename=wine-reviews.zip"));
//! assert_eq!(target.filename(), "wine-reviews.zip");
//! # Ok::<(), kdataset::Error>(())
//! ```

pub mod hash;
pub mod locator;
pub mod request;
pub mod summary;
pub mod target;

pub use hash::{decode_md5_token, md5_file, md5_token_from_hash_header, verify_md5};
pub use locator::{Locator, DATASET_HOST};
pub use request::{Credentials, DownloadRequest};
pub use summary::{Outcome, Summary};
pub use target::{filename_from_disposition, Target, FALLBACK_FILENAME};
