use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use kdataset::{Credentials, DatasetFetcher, DownloadRequest, FetcherBuilder};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_OWNER: &str = "owner";
pub const TEST_DATASET: &str = "dataset";
pub const TEST_URL: &str = "https://www.kaggle.com/owner/dataset";
pub const TEST_USER: &str = "user";
pub const TEST_KEY: &str = "secret-token";
pub const TEST_DOWNLOAD_PATH: &str = "/api/v1/datasets/download/owner/dataset";
/// `Basic base64("user:secret-token")`
pub const TEST_AUTHORIZATION: &str = "Basic dXNlcjpzZWNyZXQtdG9rZW4=";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// `x-goog-hash` header value advertising the MD5 of `content`
pub fn goog_hash_for(content: &[u8]) -> String {
    format!(
        "crc32c=n03x6A==,md5={}",
        STANDARD.encode(md5::compute(content).0)
    )
}

/// Creates the credentials used by every test request
pub fn create_test_credentials() -> Credentials {
    Credentials::new(TEST_USER, TEST_KEY)
}

/// Creates a request for the test dataset saved into `dir`
pub fn create_test_request(dir: &Path) -> DownloadRequest {
    DownloadRequest::new(TEST_URL, create_test_credentials()).directory(dir)
}

/// Creates a fetcher pointed at the mock server, without progress bar
pub fn create_test_fetcher(server: &MockServer) -> DatasetFetcher {
    FetcherBuilder::hidden().endpoint(server.uri()).build()
}

/// Starts a mock dataset service answering the test dataset download with
/// `response`, only for properly authenticated requests.
pub async fn start_dataset_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TEST_DOWNLOAD_PATH))
        .and(header("authorization", TEST_AUTHORIZATION))
        .and(header("accept", "file"))
        .and(header("user-agent", "Swagger-Codegen/1/python"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    server
}

/// A 200 response carrying `content` as an attachment named `filename`
pub fn attachment(content: &[u8], filename: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header(
            "content-disposition",
            format!("attachment; filename={}", filename).as_str(),
        )
        .set_body_bytes(content.to_vec())
}

/// Lists the files of a directory
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Failed to read entry").path())
        .collect()
}

/// Asserts that a file exists with the expected content
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content, expected, "File content mismatch at path: {:?}", path);
}
