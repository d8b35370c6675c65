//! Store error types
//!
//! Error codes:
//! - SCHOOL_STORE_IO_ERROR
//! - SCHOOL_STORE_WRITE_FAILED
//! - SCHOOL_STORE_READ_FAILED
//! - SCHOOL_DATA_CORRUPTION
//!
//! None of these reach the HTTP caller verbatim; the HTTP layer logs them and
//! answers with a generic message.

use std::fmt;
use std::io;

/// Store error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Filesystem failure outside a read or write (e.g. creating directories)
    IoError,
    /// Appending a record failed
    WriteFailed,
    /// Reading the store failed
    ReadFailed,
    /// A stored record failed checksum or framing checks
    DataCorruption,
}

impl StoreErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::IoError => "SCHOOL_STORE_IO_ERROR",
            StoreErrorCode::WriteFailed => "SCHOOL_STORE_WRITE_FAILED",
            StoreErrorCode::ReadFailed => "SCHOOL_STORE_READ_FAILED",
            StoreErrorCode::DataCorruption => "SCHOOL_DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with code, message and optional context
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    details: Option<String>,
    source: Option<io::Error>,
}

impl StoreError {
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::IoError,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::WriteFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::ReadFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Lock poisoned by a panicking writer
    pub fn poisoned() -> Self {
        Self {
            code: StoreErrorCode::ReadFailed,
            message: "store lock poisoned".to_string(),
            details: None,
            source: None,
        }
    }

    /// Blocking store task did not complete
    pub fn task_failed(reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::IoError,
            message: reason.into(),
            details: None,
            source: None,
        }
    }

    /// Corruption detected at a byte offset in the store file
    pub fn corruption_at_offset(offset: u64, reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::DataCorruption,
            message: reason.into(),
            details: Some(format!("byte_offset: {}", offset)),
            source: None,
        }
    }

    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
