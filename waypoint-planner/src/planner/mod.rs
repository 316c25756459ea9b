//! Frontier-pruned search for the cheapest start-to-end route.
//!
//! The course runs from one corner of a square region to the opposite one,
//! through an ordered stream of waypoints. Each waypoint is either visited
//! (travel plus a dwell) or skipped (a fixed penalty). The recurrence over
//! "last visited waypoint" is quadratic when evaluated naively; the frontier
//! keeps only candidates that could still be the best departure point for
//! some later stop, discarding the rest by a bounds-based dominance test.

mod bounds;
mod candidate;
mod config;
mod frontier;
mod solve;

pub use bounds::{time_max, time_min, travel_time};
pub use candidate::Candidate;
pub use config::{ConfigError, CourseConfig};
pub use frontier::{Admission, Frontier, PruneMode, SolveStats, Solution};
pub use solve::{solve, solve_with, try_solve_with};
