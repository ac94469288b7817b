//! Download outcome reporting.
//!
//! A [`Summary`] is produced at the end of every invocation that did not
//! abort with an [`Error`](crate::Error). Its [`Outcome`] tells apart the
//! non-fatal endings: a refused request, a checksum mismatch, a skipped
//! checksum and plain success.
//!
//! ```rust
//! use kdataset::download::{Outcome, Summary, Target};
//! use reqwest::StatusCode;
//!
//! let target = Target::resolve(None, None, Some("attachment; filename=foo.zip"));
//! let summary = Summary::written(target, StatusCode::OK, 1024).with_outcome(Outcome::Verified);
//!
//! assert!(summary.is_success());
//! assert_eq!(summary.outcome().verdict(), Some("MD5 is correct."));
//! ```

use super::target::Target;
use reqwest::StatusCode;
use std::fmt;

/// How a download invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was written and no verification was requested.
    Success,
    /// The file was written and its MD5 matches the advertised one.
    Verified,
    /// Verification was requested but could not run, with the reason.
    ChecksumSkipped(String),
    /// The file was written but its MD5 differs from the advertised one.
    ChecksumMismatch {
        /// Advertised digest, hex encoded.
        expected: String,
        /// Digest of the written file, hex encoded.
        actual: String,
    },
    /// The server refused the request.
    Failed {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Reason phrase of the status.
        reason: String,
    },
}

impl Outcome {
    /// Build a [`Outcome::Failed`] from a response status.
    pub fn failed(status: StatusCode) -> Self {
        Outcome::Failed {
            status,
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Whether the invocation counts as successful.
    ///
    /// A skipped checksum still counts as success.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Success | Outcome::Verified | Outcome::ChecksumSkipped(_)
        )
    }

    /// Human-readable verdict of the checksum verification, if one was
    /// requested and the file was written.
    pub fn verdict(&self) -> Option<&'static str> {
        match self {
            Outcome::Verified => Some("MD5 is correct."),
            Outcome::ChecksumMismatch { .. } => Some("MD5 is not correct."),
            Outcome::ChecksumSkipped(_) => Some("MD5 check has not been done."),
            Outcome::Success | Outcome::Failed { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "downloaded"),
            Outcome::Verified => write!(f, "downloaded, MD5 verified"),
            Outcome::ChecksumSkipped(reason) => write!(f, "downloaded, MD5 not checked: {reason}"),
            Outcome::ChecksumMismatch { expected, actual } => {
                write!(f, "downloaded, MD5 mismatch: expected {expected}, got {actual}")
            }
            Outcome::Failed { status, reason } => {
                write!(f, "request failed: {} {}", status.as_u16(), reason)
            }
        }
    }
}

/// Report of one download invocation.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Where the file was written, unset when the request was refused.
    target: Option<Target>,
    /// HTTP status code.
    statuscode: StatusCode,
    /// Bytes written to disk.
    size: u64,
    /// Outcome.
    outcome: Outcome,
}

impl Summary {
    /// Summary of a request refused by the server. Nothing was written.
    pub fn refused(statuscode: StatusCode) -> Self {
        Self {
            target: None,
            statuscode,
            size: 0,
            outcome: Outcome::failed(statuscode),
        }
    }

    /// Summary of a file fully written to `target`.
    pub fn written(target: Target, statuscode: StatusCode, size: u64) -> Self {
        Self {
            target: Some(target),
            statuscode,
            size,
            outcome: Outcome::Success,
        }
    }

    /// Attach an outcome to the [`Summary`].
    pub fn with_outcome(self, outcome: Outcome) -> Self {
        Self { outcome, ..self }
    }

    /// Get the resolved target, if a file was written.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Get the HTTP status code.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Shortcut for [`Outcome::is_success`].
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_target() -> Target {
        Target::resolve(None, Some("test.zip"), None)
    }

    #[test]
    fn test_outcome_success_classes() {
        assert!(Outcome::Success.is_success());
        assert!(Outcome::Verified.is_success());
        assert!(Outcome::ChecksumSkipped("no header".into()).is_success());
        assert!(!Outcome::ChecksumMismatch {
            expected: "a".into(),
            actual: "b".into()
        }
        .is_success());
        assert!(!Outcome::failed(StatusCode::NOT_FOUND).is_success());
    }

    #[test]
    fn test_outcome_failed_keeps_reason() {
        match Outcome::failed(StatusCode::FORBIDDEN) {
            Outcome::Failed { status, reason } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(reason, "Forbidden");
            }
            other => panic!("Expected Failed outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_verdicts() {
        assert_eq!(Outcome::Success.verdict(), None);
        assert_eq!(Outcome::Verified.verdict(), Some("MD5 is correct."));
        assert_eq!(
            Outcome::ChecksumSkipped("x".into()).verdict(),
            Some("MD5 check has not been done.")
        );
        assert_eq!(
            Outcome::ChecksumMismatch {
                expected: "a".into(),
                actual: "b".into()
            }
            .verdict(),
            Some("MD5 is not correct.")
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            Outcome::failed(StatusCode::NOT_FOUND).to_string(),
            "request failed: 404 Not Found"
        );
        let mismatch = Outcome::ChecksumMismatch {
            expected: "aa".into(),
            actual: "bb".into(),
        };
        assert_eq!(
            mismatch.to_string(),
            "downloaded, MD5 mismatch: expected aa, got bb"
        );
    }

    #[test]
    fn test_summary_refused() {
        let summary = Summary::refused(StatusCode::NOT_FOUND);
        assert!(summary.target().is_none());
        assert_eq!(summary.size(), 0);
        assert_eq!(summary.statuscode(), StatusCode::NOT_FOUND);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_summary_written() {
        let summary = Summary::written(create_test_target(), StatusCode::OK, 1024);
        assert_eq!(summary.target().map(Target::filename), Some("test.zip"));
        assert_eq!(summary.size(), 1024);
        assert_eq!(summary.outcome(), &Outcome::Success);

        let summary = summary.with_outcome(Outcome::Verified);
        assert_eq!(summary.outcome(), &Outcome::Verified);
    }
}
