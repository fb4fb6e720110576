//! Marktime - cumulative wall-clock timing between source marks
//!
//! Drop `mark()` calls into code, run it, then call `stats()` to print how
//! long execution spent between each pair of consecutive marks in the same
//! file. Intervals reached repeatedly, as in a loop, are summed.
//!
//! ```
//! use marktime::{clear, mark, report};
//!
//! clear();
//! for _ in 0..5 {
//!     mark();
//!     let _sum: u64 = (0..10_000).sum();
//!     mark();
//! }
//! let report = report();
//! assert_eq!(report.files[0].ranges[0].hits, 5);
//! ```
//!
//! The free functions share one process-wide [`IntervalTracker`]. Programs
//! that want separate accumulators can create their own trackers.

pub mod cli;
pub mod error;
pub mod interval;
pub mod location;
pub mod report;
pub mod tracker;

use std::borrow::Cow;

pub use cli::OutputFormat;
pub use error::{MarktimeError, Result};
pub use interval::{IntervalStats, LineRange};
pub use location::MarkLocation;
pub use report::{FileReport, RangeReport, Report};
pub use tracker::IntervalTracker;

/// Process-wide tracker behind `mark()`, `clear()` and `stats()`
pub static GLOBAL_TRACKER: IntervalTracker = IntervalTracker::new();

/// Mark the caller's file and line on the global tracker
#[track_caller]
pub fn mark() {
    GLOBAL_TRACKER.mark();
}

/// Mark an explicit source identifier and line on the global tracker
pub fn mark_labeled(file: impl Into<Cow<'static, str>>, line: u32) {
    GLOBAL_TRACKER.mark_labeled(file, line);
}

/// Reset the global tracker
pub fn clear() {
    GLOBAL_TRACKER.clear();
}

/// Print the global tracker's report to stderr
pub fn stats() {
    GLOBAL_TRACKER.stats();
}

/// Snapshot of the global tracker
pub fn report() -> Report {
    GLOBAL_TRACKER.report()
}
