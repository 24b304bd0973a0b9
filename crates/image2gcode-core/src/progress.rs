//! Throttled progress reporting.

use std::time::{Duration, Instant};

/// Callback receiving (completed, total) pixel counts.
pub type ProgressFn<'a> = Box<dyn FnMut(u64, u64) + 'a>;

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Invokes the callback at most once per half second.
///
/// Purely a side channel: reporting never touches algorithmic state, and
/// the engines call it freely from their inner loops.
pub struct ProgressReporter<'a> {
    callback: Option<ProgressFn<'a>>,
    last_report: Instant,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(callback: ProgressFn<'a>) -> Self {
        Self {
            callback: Some(callback),
            last_report: Instant::now(),
        }
    }

    /// A reporter that drops every report.
    pub fn disabled() -> Self {
        Self {
            callback: None,
            last_report: Instant::now(),
        }
    }

    pub fn report(&mut self, completed: u64, total: u64) {
        if let Some(callback) = self.callback.as_mut() {
            if self.last_report.elapsed() >= REPORT_INTERVAL {
                callback(completed, total);
                self.last_report = Instant::now();
            }
        }
    }
}

impl std::fmt::Debug for ProgressReporter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("enabled", &self.callback.is_some())
            .field("last_report", &self.last_report)
            .finish()
    }
}
