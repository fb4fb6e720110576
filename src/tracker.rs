//! Interval tracker
//!
//! Accumulates wall-clock time between consecutive marks that share a
//! source identifier. Each identifier remembers only its latest mark; a new
//! mark at a strictly greater line closes the range `(previous, current)`
//! and adds the elapsed time to that range's running total.
//!
//! Marks at a line that does not increase (a loop jumping back to its top
//! mark, for instance) contribute nothing but still replace the latest
//! mark. Time spent between the last mark of a loop body and the jump back
//! is therefore never attributed to any range.
//!
//! # Example
//! ```
//! use marktime::IntervalTracker;
//!
//! let tracker = IntervalTracker::new();
//! for _ in 0..3 {
//!     tracker.mark();
//!     let _work: u64 = (0..1_000).sum();
//!     tracker.mark();
//! }
//! let report = tracker.report();
//! assert_eq!(report.files.len(), 1);
//! assert_eq!(report.files[0].ranges[0].hits, 3);
//! ```

use crate::error::Result;
use crate::interval::{IntervalStats, LineRange};
use crate::location::MarkLocation;
use crate::report::{FileReport, Report};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Most recent mark seen for a source identifier
#[derive(Debug, Clone, Copy)]
struct LastMark {
    line: u32,
    at: Instant,
}

#[derive(Debug)]
struct TrackerState {
    last_marks: BTreeMap<Cow<'static, str>, LastMark>,
    intervals: BTreeMap<Cow<'static, str>, HashMap<LineRange, IntervalStats>>,
}

impl TrackerState {
    const fn new() -> Self {
        Self {
            last_marks: BTreeMap::new(),
            intervals: BTreeMap::new(),
        }
    }
}

/// Accumulates time between marks, grouped by source identifier
///
/// Both maps sit behind one mutex, so marks from several threads never
/// lose a contribution. Threads marking under the same identifier still
/// share its latest mark.
#[derive(Debug)]
pub struct IntervalTracker {
    state: Mutex<TrackerState>,
}

impl Default for IntervalTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalTracker {
    /// Create an empty tracker
    ///
    /// `const` so a tracker can live in a `static` without lazy setup.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(TrackerState::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        // The maps stay consistent even if a holder panicked
        self.state.lock().unwrap_or_else(|poisoned| {
            debug!("Recovering poisoned interval tracker lock");
            poisoned.into_inner()
        })
    }

    /// Mark the caller's file and line at the current time
    #[track_caller]
    pub fn mark(&self) {
        let location = MarkLocation::caller();
        self.mark_at(location, Instant::now());
    }

    /// Mark an explicit source identifier and line at the current time
    pub fn mark_labeled(&self, file: impl Into<Cow<'static, str>>, line: u32) {
        self.mark_at(MarkLocation::new(file, line), Instant::now());
    }

    /// Mark `location` as reached at `now`
    ///
    /// An instant earlier than the previous mark counts as zero elapsed time.
    pub fn mark_at(&self, location: MarkLocation, now: Instant) {
        let mut guard = self.lock();
        let state = &mut *guard;

        if let Some(last) = state.last_marks.get(&*location.file).copied() {
            match LineRange::between(last.line, location.line) {
                Some(range) => {
                    let elapsed = now.saturating_duration_since(last.at);
                    state
                        .intervals
                        .entry(location.file.clone())
                        .or_default()
                        .entry(range)
                        .or_default()
                        .add(elapsed);
                    trace!(file = %location.file, %range, ?elapsed, "interval recorded");
                }
                None => {
                    trace!(
                        file = %location.file,
                        from = last.line,
                        to = location.line,
                        "non-increasing mark, interval skipped"
                    );
                }
            }
        }

        state.last_marks.insert(
            location.file,
            LastMark {
                line: location.line,
                at: now,
            },
        );
    }

    /// Forget every mark and accumulated interval
    pub fn clear(&self) {
        let mut state = self.lock();
        debug!(files = state.intervals.len(), "Clearing interval tracker");
        state.last_marks.clear();
        state.intervals.clear();
    }

    /// Snapshot of all accumulated intervals
    pub fn report(&self) -> Report {
        let state = self.lock();
        Report {
            files: state
                .intervals
                .iter()
                .filter(|(_, ranges)| !ranges.is_empty())
                .map(|(file, ranges)| FileReport::from_ranges(file.to_string(), ranges))
                .collect(),
        }
    }

    /// Print the text report to stderr
    ///
    /// Prints nothing when no interval has been recorded.
    pub fn stats(&self) {
        // Snapshot first so the lock is not held while writing
        let text = self.report().to_text();
        eprint!("{}", text);
    }

    /// Write the text report to `out`
    pub fn write_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        self.report().write_text(out)
    }

    /// True when no interval has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().intervals.values().all(HashMap::is_empty)
    }

    /// Number of source identifiers with at least one recorded interval
    pub fn file_count(&self) -> usize {
        self.lock()
            .intervals
            .values()
            .filter(|ranges| !ranges.is_empty())
            .count()
    }

    /// Accumulated time for one range
    pub fn total_for(&self, file: &str, range: LineRange) -> Option<Duration> {
        self.stats_for(file, range).map(|stats| stats.total)
    }

    /// Number of intervals summed into one range
    pub fn hits_for(&self, file: &str, range: LineRange) -> Option<u64> {
        self.stats_for(file, range).map(|stats| stats.hits)
    }

    fn stats_for(&self, file: &str, range: LineRange) -> Option<IntervalStats> {
        self.lock()
            .intervals
            .get(file)
            .and_then(|ranges| ranges.get(&range))
            .copied()
    }

    /// Line of the latest mark seen for `file`
    pub fn last_line(&self, file: &str) -> Option<u32> {
        self.lock().last_marks.get(file).map(|last| last.line)
    }
}
