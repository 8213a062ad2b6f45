//! Utility helpers used across the crate.
//!
//! Byte-count formatting for the completion summary and output-filename
//! inference from the source URL.
use percent_encoding::percent_decode_str;
use sanitize_filename::sanitize;
use url::Url;

/// Name used when the URL yields no usable final path segment.
pub const DEFAULT_FILENAME: &str = "download";

/// Formats a byte count with binary (1024-step) units.
///
/// Walks up through `B`, `KB`, `MB`, `GB`, `TB` while the scaled value
/// still reaches 1024, keeping one decimal place. Anything at or beyond
/// the `PB` tier is reported in `PB`; there is no higher unit.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} PB", size)
}

/// Extracts an output filename from a URL.
///
/// 1. Parses the URL.
/// 2. Takes the last segment of the path (query and fragment excluded).
/// 3. URL-decodes it (converts %20 to space, etc.).
/// 4. Sanitizes it to remove characters invalid for the OS.
/// 5. Falls back to `"download"` if no valid filename is found.
pub fn filename_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .map(|mut s| s.next_back().unwrap_or("").to_string())
        })
        .map(|s| percent_decode_str(&s).decode_utf8_lossy().to_string())
        .map(sanitize)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_unit_steps() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(500), "500.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_bytes(1024u64.pow(3)), "1.0 GB");
        assert_eq!(format_bytes(1024u64.pow(4)), "1.0 TB");
    }

    #[test]
    fn test_format_bytes_top_tier_absorbs_larger_magnitudes() {
        assert_eq!(format_bytes(1024u64.pow(5)), "1.0 PB");
        // No unit above PB: the value just keeps growing.
        assert_eq!(format_bytes(1024u64.pow(6)), "1024.0 PB");
    }

    #[test]
    fn test_filename_extraction() {
        // Simple case
        assert_eq!(
            filename_from_url("https://x.test/a/b/file.zip"),
            "file.zip"
        );

        // With query parameters (should ignore ?id=123)
        assert_eq!(
            filename_from_url("https://example.com/image.png?id=123&quality=high"),
            "image.png"
        );

        // With URL encoding (%20)
        assert_eq!(
            filename_from_url("https://example.com/my%20vacation%20photo.jpg"),
            "my vacation photo.jpg"
        );
    }

    #[test]
    fn test_filename_fallback() {
        // Edge case: no filename (ends in slash)
        assert_eq!(filename_from_url("https://example.com/"), "download");

        // Bare host, path is just "/"
        assert_eq!(filename_from_url("https://example.com"), "download");

        // Not a URL at all
        assert_eq!(filename_from_url("definitely not a url"), "download");
    }
}
