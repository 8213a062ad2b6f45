//! Live progress display for a single transfer.
//!
//! Wraps one [`indicatif::ProgressBar`]: a byte-accurate bar with an ETA
//! when the total size is known, an indeterminate spinner when it is
//! not. Dropping an unfinished reporter abandons the bar, so the display
//! is released on every exit path including download failures.
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TICK: Duration = Duration::from_millis(100);

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        .unwrap()
        .progress_chars("#>-")
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg} {bytes} ({elapsed})").unwrap()
}

/// Progress reporter for one download.
///
/// Keeps the raw transferred counter next to the rendered bar. The
/// counter is monotonically non-decreasing and never clamped; the
/// rendered position is capped at the declared total, so a server that
/// understates `Content-Length` shows a full bar rather than an error.
pub struct TransferProgress {
    bar: ProgressBar,
    total: Option<u64>,
    transferred: u64,
}

impl TransferProgress {
    /// Starts the display: a bar when `total` is known, a steadily
    /// ticking spinner when it is not. ETA is only ever rendered on the
    /// bar variant.
    pub fn new(description: impl Into<String>, total: Option<u64>) -> Self {
        let bar = match total {
            Some(len) => ProgressBar::new(len).with_style(bar_style()),
            None => {
                let spinner = ProgressBar::new_spinner().with_style(spinner_style());
                spinner.enable_steady_tick(SPINNER_TICK);
                spinner
            }
        };
        bar.set_message(description.into());

        Self {
            bar,
            total,
            transferred: 0,
        }
    }

    /// Records `delta` more transferred bytes and moves the display.
    pub fn advance(&mut self, delta: u64) {
        self.transferred = self.transferred.saturating_add(delta);
        let shown = match self.total {
            Some(len) => self.transferred.min(len),
            None => self.transferred,
        };
        self.bar.set_position(shown);
    }

    /// Raw transferred byte count, unclamped.
    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    /// Position currently shown on the display surface.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Final render; leaves the completed line on screen.
    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl Drop for TransferProgress {
    fn drop(&mut self) {
        // `abandon` keeps the last frame but stops all redrawing.
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}
