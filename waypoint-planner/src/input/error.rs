//! Input stream error types.

use crate::domain::InvalidPoint;

/// Errors that can occur while reading cases from an input stream.
///
/// Every variant is fatal for the whole run; there is no per-case recovery.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading from the underlying stream failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A case-size line is not a non-negative integer
    #[error("line {line}: invalid case size {text:?}")]
    InvalidCaseSize { line: usize, text: String },

    /// A waypoint line is not an integer triple
    #[error("line {line}: invalid waypoint {text:?}: {reason}")]
    InvalidWaypoint {
        line: usize,
        text: String,
        reason: &'static str,
    },

    /// A waypoint lies outside the operating region
    #[error("line {line}: {source}")]
    OutOfRange {
        line: usize,
        #[source]
        source: InvalidPoint,
    },

    /// Input ended in the middle of a case
    #[error("input ended after {found} of {expected} waypoints")]
    TruncatedCase { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InputError::InvalidCaseSize {
            line: 3,
            text: "x".into(),
        };
        assert_eq!(err.to_string(), "line 3: invalid case size \"x\"");

        let err = InputError::InvalidWaypoint {
            line: 7,
            text: "1 2".into(),
            reason: "expected 3 fields",
        };
        assert_eq!(
            err.to_string(),
            "line 7: invalid waypoint \"1 2\": expected 3 fields"
        );

        let err = InputError::OutOfRange {
            line: 2,
            source: InvalidPoint {
                x: 101,
                y: 0,
                edge: 100,
            },
        };
        assert_eq!(
            err.to_string(),
            "line 2: point (101, 0) lies outside the region [0, 100]"
        );

        let err = InputError::TruncatedCase {
            expected: 4,
            found: 1,
        };
        assert_eq!(err.to_string(), "input ended after 1 of 4 waypoints");
    }
}
