//! Call-site identity for marks
//!
//! A mark is identified by a source identifier (normally the file that
//! contains the call) and a line within it. `#[track_caller]` lets the
//! public `mark()` functions pick up the user's call site instead of one
//! inside this crate.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Where a mark happened
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkLocation {
    /// Source identifier the mark is grouped under
    pub file: Cow<'static, str>,
    /// Ordinal position within `file`
    pub line: u32,
}

impl MarkLocation {
    /// Build a location from an explicit label and line
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Capture the location of the caller
    ///
    /// Any `#[track_caller]` function between the user code and this call
    /// is skipped, so wrapping it keeps reporting the user's line.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for MarkLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }
}

impl fmt::Display for MarkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
