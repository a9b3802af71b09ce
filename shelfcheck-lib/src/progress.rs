//! Pass progress reporting.

use crate::report::PassReport;

/// Trait for receiving progress updates during a pass.
pub trait PassProgress {
    /// Called once per list item, skipped ones included. `current` is 1-based.
    fn on_item(&self, current: usize, total: usize, item: &str);

    /// Called when the pass is complete.
    fn on_complete(&self, report: &PassReport);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl PassProgress for SilentProgress {
    fn on_item(&self, _current: usize, _total: usize, _item: &str) {}
    fn on_complete(&self, _report: &PassReport) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl PassProgress for LogProgress {
    fn on_item(&self, current: usize, _total: usize, item: &str) {
        log::info!("{}: {}", current, item);
    }

    fn on_complete(&self, report: &PassReport) {
        log::info!("Done: {}", report.summary());
    }
}
