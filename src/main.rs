//! Command-line binary entrypoint for `rget`.
//!
//! Parses the arguments, builds the shared HTTP client, runs the
//! streaming driver, and prints the completion summary. Errors
//! propagate out of `main` so the process exits non-zero with anyhow's
//! standard report.
use anyhow::Result;
use clap::Parser;
use rget::args::Args;
use rget::downloader::{download, DownloadRequest};
use rget::utils::format_bytes;

const USER_AGENT: &str = concat!("rget/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let request = DownloadRequest {
        url: args.url,
        output: args.output,
        chunk_size: args.chunk_size,
    };

    let summary = download(&request, &client).await?;

    println!("✓ Downloaded to {}", summary.path.display());
    println!("  Size: {}", format_bytes(summary.bytes));

    Ok(())
}
