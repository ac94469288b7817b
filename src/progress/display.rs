//! Progress reporting while the response body is drained.

use super::style::ProgressBarOpts;
use indicatif::ProgressBar;

/// Progress display of a single body transfer.
pub struct ProgressDisplay {
    bar: ProgressBar,
    clear: bool,
}

impl ProgressDisplay {
    /// Create the display for a body of `len` bytes, when known.
    pub fn new(opts: &ProgressBarOpts, len: Option<u64>) -> Self {
        Self {
            bar: opts.to_progress_bar(len),
            clear: opts.clears(),
        }
    }

    /// Set the message shown next to the bar.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.bar.set_message(msg.into());
    }

    /// Advance the bar by `bytes`.
    pub fn inc(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    /// Get the number of bytes reported so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the bar, clearing it or keeping it based on configuration.
    pub fn finish(self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}
