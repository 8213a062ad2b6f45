//! Single-pass streaming download driver.
//!
//! Opens one GET request, streams the body to disk in bounded chunks,
//! and advances the progress display after every written chunk. There
//! is no retry, no resume, and no verification: each invocation is one
//! best-effort transfer, and any transport or filesystem error aborts
//! it with whatever bytes already reached disk left in place.
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use futures_util::TryStreamExt;
use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::io::StreamReader;

use crate::progress::TransferProgress;
use crate::utils::filename_from_url;

/// Read/write chunk size used when the caller does not override it.
pub const DEFAULT_CHUNK_SIZE: u64 = 8192;

/// One download to perform: where from, where to, and how much to read
/// per step. Built once from the invocation arguments, never mutated.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Source URL.
    pub url: String,
    /// Explicit output path; inferred from the URL when `None`.
    pub output: Option<PathBuf>,
    /// Upper bound on bytes read (and written) per step.
    pub chunk_size: u64,
}

impl DownloadRequest {
    /// Resolves the output path exactly once: the explicit path when
    /// given, otherwise the URL's final path segment, falling back to
    /// `"download"`. Never empty.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(filename_from_url(&self.url)),
        }
    }
}

/// What a finished download produced.
#[derive(Debug)]
pub struct DownloadSummary {
    /// Where the file was written.
    pub path: PathBuf,
    /// Final size on disk, read back from the filesystem rather than
    /// taken from the progress counter.
    pub bytes: u64,
}

/// Reads the declared body size from the response headers.
///
/// A missing or unparsable `Content-Length` degrades to `None` (total
/// unknown); it never fails the download.
fn declared_total(headers: &HeaderMap) -> Option<u64> {
    headers.get(CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

/// Downloads `request.url` to the resolved output path.
///
/// The response body is adapted to an `AsyncRead` so every loop step
/// pulls at most `chunk_size` bytes regardless of how the network
/// frames the stream, and each chunk is written in full before the next
/// read. The returned size is taken from the written file's metadata as
/// an independent check on the transfer.
///
/// # Errors
///
/// Returns an error if:
/// * `request.chunk_size` is zero.
/// * The request cannot be sent or the connection drops mid-transfer.
/// * The final response status (after redirects) is not a success.
/// * The output file cannot be created or written.
pub async fn download(request: &DownloadRequest, client: &Client) -> Result<DownloadSummary> {
    // A zero-byte read buffer would make every read look like EOF, so
    // the driver rejects it even though the CLI already does.
    if request.chunk_size == 0 {
        return Err(anyhow!("chunk_size must be at least 1 byte"));
    }

    let path = request.output_path();

    let response = client
        .get(&request.url)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", request.url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("Request failed. Status Code: {}", status));
    }

    let total = declared_total(response.headers());

    let filename = match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.display().to_string(),
    };
    let mut progress = TransferProgress::new(format!("Downloading {}", filename), total);

    // Created only after the status check: an HTTP error status must
    // not leave a file behind.
    let mut file = File::create(&path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let body = response
        .bytes_stream()
        .map_err(|e| std::io::Error::new(ErrorKind::Other, e));
    let mut reader = StreamReader::new(body);
    let mut chunk = vec![0u8; request.chunk_size as usize];

    loop {
        let read = reader
            .read(&mut chunk)
            .await
            .context("Connection interrupted mid-transfer")?;
        if read == 0 {
            break;
        }

        file.write_all(&chunk[..read])
            .await
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        progress.advance(read as u64);
    }

    file.flush().await?;
    drop(file);
    progress.finish();

    // Report what actually landed on disk, not what the counter saw.
    let bytes = tokio::fs::metadata(&path).await?.len();

    Ok(DownloadSummary { path, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn request(url: &str) -> DownloadRequest {
        DownloadRequest {
            url: url.to_string(),
            output: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    #[test]
    fn test_output_path_prefers_explicit_path() {
        let mut req = request("https://x.test/a/b/file.zip");
        req.output = Some(PathBuf::from("elsewhere.bin"));

        assert_eq!(req.output_path(), PathBuf::from("elsewhere.bin"));
    }

    #[test]
    fn test_output_path_inferred_from_url() {
        let req = request("https://x.test/a/b/file.zip");
        assert_eq!(req.output_path(), PathBuf::from("file.zip"));
    }

    #[test]
    fn test_output_path_falls_back_on_empty_segment() {
        let req = request("https://x.test/a/b/");
        assert_eq!(req.output_path(), PathBuf::from("download"));
    }

    #[test]
    fn test_declared_total_parses_well_formed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("1048576"));

        assert_eq!(declared_total(&headers), Some(1_048_576));
    }

    #[test]
    fn test_declared_total_missing_header_means_unknown() {
        assert_eq!(declared_total(&HeaderMap::new()), None);
    }

    #[test]
    fn test_declared_total_malformed_header_means_unknown() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("not-a-number"));

        assert_eq!(declared_total(&headers), None);
    }

    #[tokio::test]
    async fn test_zero_chunk_size_is_rejected() {
        let mut req = request("https://x.test/a/b/file.zip");
        req.chunk_size = 0;
        let client = Client::new();

        // Must fail before any request is sent; a zero buffer would
        // otherwise read as instant EOF and report an empty success.
        let err = download(&req, &client)
            .await
            .expect_err("zero chunk size must fail");
        assert!(err.to_string().contains("chunk_size"));
    }
}
