//! Progress module containing the download progress bar.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - The bar shown while the response body is written to disk
//!
//! ```rust
//! use kdataset::fetcher::FetcherBuilder;
//! use kdataset::progress::ProgressBarOpts;
//!
//! let fetcher = FetcherBuilder::new()
//!     .progress(ProgressBarOpts::with_pip_style())
//!     .build();
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::ProgressBarOpts;
