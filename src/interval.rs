//! Line ranges and their accumulated time

use std::fmt;
use std::time::Duration;

/// Pair of consecutive mark lines within one source identifier
///
/// Ordering is by `start`, then `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    /// Range between two mark lines, or `None` unless `start < end`
    ///
    /// A non-increasing pair is what a loop produces when it jumps back
    /// to its top mark; such pairs are never accumulated.
    pub fn between(start: u32, end: u32) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Time accumulated for a single line range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalStats {
    /// Sum of all contributed intervals
    pub total: Duration,
    /// Number of contributions
    pub hits: u64,
}

impl IntervalStats {
    /// Add one interval
    pub fn add(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.hits += 1;
    }

    /// Total in fractional seconds
    pub fn seconds(&self) -> f64 {
        self.total.as_secs_f64()
    }
}
