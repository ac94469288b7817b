//! MD5 verification of downloaded files.
//!
//! The dataset service advertises the MD5 of the archive in the `x-goog-hash`
//! response header, base64 encoded, next to other digests:
//!
//! ```text
//! x-goog-hash: crc32c=n03x6A==,md5=Ojk9c3dhfxgoKVVHYwFbHQ==
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kdataset::download::hash::{decode_md5_token, md5_token_from_hash_header};
//!
//! let header = "crc32c=n03x6A==,md5=1B2M2Y8AsgTpgAmY7PhCfg==";
//! let token = md5_token_from_hash_header(header).unwrap();
//! assert_eq!(token, "1B2M2Y8AsgTpgAmY7PhCfg==");
//!
//! // MD5 of the empty input.
//! let digest = decode_md5_token(token).unwrap();
//! assert_eq!(digest, md5::compute(b"").0.to_vec());
//! ```

use super::summary::Outcome;
use crate::error::Result;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::{fs::File, io::AsyncReadExt};

/// Size of the buffer used to re-read the written file.
const READ_CHUNK_SIZE: usize = 2048;

static MD5_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"md5=([A-Za-z0-9=+/]+)").expect("md5 regex is valid") // Static pattern, safe to panic
});

/// Extract the base64 MD5 token from an `x-goog-hash` header value.
pub fn md5_token_from_hash_header(header: &str) -> Option<&str> {
    MD5_TOKEN
        .captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Decode a base64 MD5 token into the raw digest.
///
/// Returns `None` when the token is not valid base64.
pub fn decode_md5_token(token: &str) -> Option<Vec<u8>> {
    STANDARD.decode(token).ok()
}

/// Compute the MD5 digest of a file, reading it in bounded chunks.
pub async fn md5_file(path: &Path) -> Result<md5::Digest> {
    let mut file = File::open(path).await?;
    let mut context = md5::Context::new();
    let mut buffer = [0u8; READ_CHUNK_SIZE];

    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        context.consume(&buffer[..read]);
    }

    Ok(context.compute())
}

/// Compare the MD5 digest of a file against an expected raw digest.
///
/// The comparison is byte for byte on the raw digests, never on their text
/// encodings. Returns [`Outcome::Verified`] or [`Outcome::ChecksumMismatch`].
pub async fn verify_md5(path: &Path, expected: &[u8]) -> Result<Outcome> {
    let actual = md5_file(path).await?;
    if actual.0.as_slice() == expected {
        Ok(Outcome::Verified)
    } else {
        Ok(Outcome::ChecksumMismatch {
            expected: hex::encode(expected),
            actual: hex::encode(actual.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_md5_token_from_hash_header() {
        assert_eq!(
            md5_token_from_hash_header("crc32c=n03x6A==,md5=Ojk9c3dhfxgoKVVHYwFbHQ=="),
            Some("Ojk9c3dhfxgoKVVHYwFbHQ==")
        );
        assert_eq!(
            md5_token_from_hash_header("md5=ab+/CD=="),
            Some("ab+/CD==")
        );
    }

    #[test]
    fn test_md5_token_from_hash_header_missing() {
        assert_eq!(md5_token_from_hash_header("crc32c=n03x6A=="), None);
        assert_eq!(md5_token_from_hash_header(""), None);
        assert_eq!(md5_token_from_hash_header("md5="), None);
    }

    #[test]
    fn test_decode_md5_token() {
        let digest = md5::compute(b"hello");
        let token = STANDARD.encode(digest.0);
        assert_eq!(decode_md5_token(&token), Some(digest.0.to_vec()));
    }

    #[test]
    fn test_decode_md5_token_invalid() {
        assert_eq!(decode_md5_token("not=base64"), None);
    }

    #[tokio::test]
    async fn test_md5_file_spans_several_chunks() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.bin");
        let content: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &content).unwrap();

        let digest = md5_file(&path).await.unwrap();
        assert_eq!(digest.0, md5::compute(&content).0);
    }

    #[tokio::test]
    async fn test_verify_md5() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.bin");
        fs::write(&path, b"test content").unwrap();

        let expected = md5::compute(b"test content");
        assert_eq!(
            verify_md5(&path, &expected.0).await.unwrap(),
            Outcome::Verified
        );

        let other = md5::compute(b"other content");
        assert_eq!(
            verify_md5(&path, &other.0).await.unwrap(),
            Outcome::ChecksumMismatch {
                expected: hex::encode(other.0),
                actual: hex::encode(expected.0),
            }
        );
    }

    #[tokio::test]
    async fn test_verify_md5_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.bin");

        let result = verify_md5(&path, &[0u8; 16]).await;
        assert!(matches!(result, Err(crate::Error::Storage { .. })));
    }
}
