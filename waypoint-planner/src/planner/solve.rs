//! Drives one case through a fresh frontier.

use std::convert::Infallible;

use crate::domain::Waypoint;

use super::config::CourseConfig;
use super::frontier::{Frontier, PruneMode, Solution};

/// Minimum total time for one case, with pruning enabled.
///
/// # Examples
///
/// ```
/// use waypoint_planner::domain::{Point, Waypoint};
/// use waypoint_planner::planner::{CourseConfig, solve};
///
/// let config = CourseConfig::default();
/// let stops = [Waypoint::new(Point::new(50, 50), 20)];
///
/// // Visiting costs two dwells and two half-diagonals; skipping costs one
/// // dwell, the full diagonal and the penalty.
/// let cost = solve(&config, stops);
/// assert_eq!(format!("{cost:.3}"), "90.711");
/// ```
pub fn solve(config: &CourseConfig, waypoints: impl IntoIterator<Item = Waypoint>) -> f64 {
    solve_with(config, waypoints, PruneMode::Dominance).cost
}

/// Solve one case with the given pruning mode, returning statistics too.
pub fn solve_with(
    config: &CourseConfig,
    waypoints: impl IntoIterator<Item = Waypoint>,
    mode: PruneMode,
) -> Solution {
    match try_solve_with(config, waypoints.into_iter().map(Ok::<_, Infallible>), mode) {
        Ok(solution) => solution,
        Err(never) => match never {},
    }
}

/// Solve one case from a fallible stream, stopping at the first error.
///
/// Waypoints are consumed as they arrive, so a stream read straight from
/// input never needs to be buffered.
pub fn try_solve_with<E>(
    config: &CourseConfig,
    waypoints: impl IntoIterator<Item = Result<Waypoint, E>>,
    mode: PruneMode,
) -> Result<Solution, E> {
    let mut frontier = Frontier::new(config, mode);
    for waypoint in waypoints {
        frontier.feed(waypoint?);
    }
    Ok(frontier.finish())
}

#[cfg(test)]
#[path = "solve_tests.rs"]
mod tests;
