//! Error types for the pi approximation driver.
//!
//! Two failure modes reach the user: a wrong argument count (usage) and a
//! term count that is not a positive integer (validation). Report write
//! failures are carried separately so `?` works across the driver.

use std::fmt;
use std::io;

/// Why a term count argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty text or anything that is not an integer literal
    NotANumber(String),
    /// Zero or negative
    NonPositive(String),
    /// Larger than the widest term count we accept
    OutOfRange(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n must be a positive integer")?;
        match self {
            ValidationError::NotANumber(s) => write!(f, " ('{}' is not a number)", s),
            ValidationError::NonPositive(s) => write!(f, " (got {})", s),
            ValidationError::OutOfRange(s) => {
                write!(f, " ('{}' exceeds the maximum of {})", s, i64::MAX)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error type for a single driver run.
#[derive(Debug)]
pub enum DriverError {
    /// Wrong number of positional arguments
    Usage,
    /// The term count failed validation
    Validation(ValidationError),
    /// Writing the report or a diagnostic failed
    Io(io::Error),
}

impl DriverError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage | DriverError::Validation(_) | DriverError::Io(_) => 1,
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Usage => write!(f, "expected exactly one argument"),
            DriverError::Validation(e) => write!(f, "{}", e),
            DriverError::Io(e) => write!(f, "output error: {}", e),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Usage => None,
            DriverError::Validation(e) => Some(e),
            DriverError::Io(e) => Some(e),
        }
    }
}

impl From<ValidationError> for DriverError {
    fn from(e: ValidationError) -> Self {
        DriverError::Validation(e)
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        DriverError::Io(e)
    }
}
