//! # rget Download Library
//!
//! `rget` downloads a single file from a URL over HTTP(S), streaming it
//! to disk with a live progress bar. It supports:
//! - Bounded-chunk streaming (the body is never buffered whole)
//! - Redirect following with fail-fast on HTTP error statuses
//! - Known and unknown total sizes (bar with ETA, or spinner)
//! - Output-filename inference from the URL
//!
//! The components are exposed as a library so that the binary, the
//! integration tests, and the examples exercise the same code path.

pub mod args;
pub mod downloader;
pub mod progress;
pub mod utils;

pub use args::Args;
pub use downloader::{download, DownloadRequest, DownloadSummary, DEFAULT_CHUNK_SIZE};
pub use progress::TransferProgress;
pub use utils::{filename_from_url, format_bytes};
