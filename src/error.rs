//! Errors from report rendering
//!
//! Marking and clearing never fail. Only the writers that hand a report
//! to an arbitrary sink or serializer can.

use thiserror::Error;

/// Errors produced while rendering or writing a report
#[derive(Error, Debug)]
pub enum MarktimeError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MarktimeError>;
