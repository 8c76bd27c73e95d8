//! Error types for the timetable tools.

use thiserror::Error;

/// Errors that can occur in timetable operations.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time label '{0}'. Expected e.g. \"9:00 AM\"")]
    InvalidTimeLabel(String),

    #[error("Subject name cannot be blank")]
    BlankSubjectName,

    #[error("No subject id left after {0}")]
    SubjectIdOverflow(u64),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for timetable operations.
pub type TimetableResult<T> = Result<T, TimetableError>;
