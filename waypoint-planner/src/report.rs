//! Formatting solved cases and checking them against reference output.

use std::io::Write;

use serde::Serialize;

use crate::planner::{Solution, SolveStats};

/// Error from comparing results with a reference output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// A case produced a different value
    #[error("case {case}: expected {expected}, got {actual}")]
    Mismatch {
        case: usize,
        expected: String,
        actual: String,
    },

    /// The two outputs hold a different number of cases
    #[error("expected {expected} cases, got {actual}")]
    CaseCount { expected: usize, actual: usize },
}

/// The outcome of one case, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    /// 1-based position of the case in the input.
    pub case: usize,
    pub cost: f64,
    #[serde(flatten)]
    pub stats: SolveStats,
}

impl CaseReport {
    pub fn new(case: usize, solution: Solution) -> Self {
        Self {
            case,
            cost: solution.cost,
            stats: solution.stats,
        }
    }

    /// The cost as printed in text output.
    pub fn formatted_cost(&self) -> String {
        format_cost(self.cost)
    }
}

/// Fixed-point rendering with three decimal places.
///
/// ```
/// use waypoint_planner::report::format_cost;
///
/// assert_eq!(format_cost(90.710678), "90.711");
/// assert_eq!(format_cost(80.0), "80.000");
/// ```
pub fn format_cost(cost: f64) -> String {
    format!("{cost:.3}")
}

/// Write one line per case.
pub fn write_result<W: Write>(out: &mut W, report: &CaseReport) -> std::io::Result<()> {
    writeln!(out, "{}", report.formatted_cost())
}

/// Write every case as a JSON array.
pub fn write_json<W: Write>(out: &mut W, reports: &[CaseReport]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Compare two text outputs case by case, exactly as printed.
///
/// Returns the number of matching cases.
pub fn compare_outputs(expected: &str, actual: &str) -> Result<usize, CheckError> {
    let expected: Vec<&str> = expected.lines().collect();
    let actual: Vec<&str> = actual.lines().collect();

    for (i, (e, a)) in expected.iter().zip(&actual).enumerate() {
        if e != a {
            return Err(CheckError::Mismatch {
                case: i + 1,
                expected: e.to_string(),
                actual: a.to_string(),
            });
        }
    }

    if expected.len() != actual.len() {
        return Err(CheckError::CaseCount {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    Ok(expected.len())
}
