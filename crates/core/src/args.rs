//! Term count parsing and validation
//!
//! The term count arrives as text on the command line. Anything that is not a
//! positive integer literal is rejected before the series is evaluated, so the
//! evaluator never sees zero.

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::num::{IntErrorKind, NonZeroU64};
use std::str::FromStr;

/// Number of series terms to sum. Always in `1..=i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TermCount(NonZeroU64);

impl TermCount {
    /// Largest accepted term count
    pub const MAX: u64 = i64::MAX as u64;

    /// Build a term count, rejecting zero and values above [`TermCount::MAX`]
    pub fn new(n: u64) -> Option<Self> {
        if n > Self::MAX {
            return None;
        }
        NonZeroU64::new(n).map(TermCount)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TermCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_term_count(s)
    }
}

/// Parse a term count argument
///
/// Surrounding whitespace is ignored and a leading `+` is allowed. Negative
/// values report as non-positive even when they overflow `i64`.
pub fn parse_term_count(raw: &str) -> Result<TermCount, ValidationError> {
    let text = raw.trim();

    let value = match text.parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::OutOfRange(raw.to_string()),
                IntErrorKind::NegOverflow => ValidationError::NonPositive(raw.to_string()),
                _ => ValidationError::NotANumber(raw.to_string()),
            });
        }
    };

    if value <= 0 {
        return Err(ValidationError::NonPositive(raw.to_string()));
    }

    u64::try_from(value)
        .ok()
        .and_then(TermCount::new)
        .ok_or_else(|| ValidationError::OutOfRange(raw.to_string()))
}
