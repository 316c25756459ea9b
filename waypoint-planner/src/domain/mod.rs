//! Domain types for the waypoint planner.
//!
//! Positions and waypoints are small `Copy` values. Region bounds are
//! checked when input is read, so code that receives these types can trust
//! their validity.

mod point;
mod waypoint;

pub use point::{InvalidPoint, Point};
pub use waypoint::Waypoint;
