//! Minimal library usage: download one file with the default settings.
//!
//! Run with: `cargo run --example simple_download`
use rget::downloader::{download, DownloadRequest, DEFAULT_CHUNK_SIZE};
use rget::utils::format_bytes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = "https://proof.ovh.net/files/10Mb.dat";

    println!("Starting example download...");
    println!("URL: {}", url);

    let client = reqwest::Client::builder()
        .user_agent("rget-example/0.1")
        .build()?;

    let request = DownloadRequest {
        url: url.to_string(),
        output: None,
        chunk_size: DEFAULT_CHUNK_SIZE,
    };

    let summary = download(&request, &client).await?;

    println!("✓ Downloaded to {}", summary.path.display());
    println!("  Size: {}", format_bytes(summary.bytes));
    Ok(())
}
