//! Command-line argument definitions.
//!
//! This module defines the parsed CLI structure using `clap`. The
//! `Args` type is exported by the crate so the binary and the tests
//! consume the same definition.
use std::path::PathBuf;

use clap::Parser;

/// Download a file from a URL with a progress bar.
///
/// Streams the response body straight to disk in bounded chunks while
/// showing transferred bytes, percentage, and estimated time remaining.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The URL of the file to download.
    pub url: String,

    /// Output filename (default: inferred from URL).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Download chunk size in bytes.
    #[arg(
        long,
        default_value_t = crate::downloader::DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub chunk_size: u64,
}
