//! Minimum-time routes through optional waypoints.
//!
//! A course runs from one corner of a square region to the opposite corner
//! through an ordered stream of waypoints. Each waypoint is either visited,
//! costing travel and a dwell, or skipped, costing its penalty. The planner
//! finds the exact optimum while keeping only a small frontier of candidate
//! departure points.

pub mod cli;
pub mod domain;
pub mod input;
pub mod planner;
pub mod report;
