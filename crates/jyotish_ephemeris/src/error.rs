//! The error type shared by every crate built on top of the ephemeris
//! adapter.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the ephemeris adapter, the search machinery built on top of
/// it, and daśā computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JyotishError {
    /// The external oracle returned a non-zero status; carries its message.
    Oracle(String),
    /// Malformed caller input: a zero `TransitLimit::Count`, an out-of-range
    /// house index, or a malformed date.
    InvalidInput(String),
    /// Bisection reached the configured resolution floor without locating
    /// an edge. Should not occur when predicates are monotonic between
    /// samples; surfaced as a diagnostic.
    ResolutionExhausted(String),
    /// Configuration could not be validated, e.g. an unreadable data path.
    Configuration(String),
}

impl Display for JyotishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oracle(msg) => write!(f, "ephemeris oracle error: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ResolutionExhausted(msg) => write!(f, "resolution exhausted: {msg}"),
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for JyotishError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_payload() {
        let e = JyotishError::Oracle("swe_calc_ut failed".to_string());
        assert!(e.to_string().contains("swe_calc_ut failed"));
    }
}
