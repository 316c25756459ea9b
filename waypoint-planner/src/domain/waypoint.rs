//! Candidate stopping points read from the input stream.

use std::fmt;

use super::Point;

/// A stop on the course together with the penalty for skipping it.
///
/// Waypoints arrive in a fixed order that the planner never changes; it only
/// decides which of them to visit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Waypoint {
    position: Point,
    penalty: u32,
}

impl Waypoint {
    /// Create a waypoint at `position`.
    pub const fn new(position: Point, penalty: u32) -> Self {
        Self { position, penalty }
    }

    /// A penalty-free waypoint, used for the implicit start and end corners.
    pub const fn corner(position: Point) -> Self {
        Self::new(position, 0)
    }

    /// Returns the waypoint's position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the cost charged when this waypoint is skipped.
    pub fn penalty(&self) -> u32 {
        self.penalty
    }
}

impl fmt::Debug for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Waypoint")
            .field("position", &self.position)
            .field("penalty", &self.penalty)
            .finish()
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} penalty={}", self.position, self.penalty)
    }
}
