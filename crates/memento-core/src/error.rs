//! Error types for the memento engines

use thiserror::Error;

/// Core memento errors
#[derive(Error, Debug)]
pub enum MementoError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // Calendar errors
    #[error("Calendar arithmetic overflow: {0}")]
    CalendarOverflow(String),

    // Clock errors
    #[error("Host clock unavailable")]
    ClockUnavailable,
}

/// Result type for memento operations
pub type MementoResult<T> = Result<T, MementoError>;
