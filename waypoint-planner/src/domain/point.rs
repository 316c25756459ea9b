//! Positions inside the square operating region.

use std::fmt;

/// Error returned when a position falls outside the operating region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("point ({x}, {y}) lies outside the region [0, {edge}]")]
pub struct InvalidPoint {
    pub x: u16,
    pub y: u16,
    pub edge: u16,
}

/// A position on the integer grid of the operating square.
///
/// Coordinates are unsigned, so the lower bound of the region is enforced by
/// the type. The upper bound depends on the configured edge length and is
/// checked by [`Point::within`].
///
/// # Examples
///
/// ```
/// use waypoint_planner::domain::Point;
///
/// let p = Point::within(30, 70, 100).unwrap();
/// assert_eq!((p.x(), p.y()), (30, 70));
///
/// // Outside a 100x100 square
/// assert!(Point::within(101, 0, 100).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: u16,
    y: u16,
}

impl Point {
    /// The origin corner.
    pub const ORIGIN: Point = Point::new(0, 0);

    /// Create a point without checking it against any region.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting coordinates beyond `edge`.
    pub fn within(x: u16, y: u16, edge: u16) -> Result<Self, InvalidPoint> {
        let point = Self::new(x, y);
        point.check_within(edge)?;
        Ok(point)
    }

    /// Check that both coordinates lie in `[0, edge]`.
    pub fn check_within(&self, edge: u16) -> Result<(), InvalidPoint> {
        if self.x > edge || self.y > edge {
            return Err(InvalidPoint {
                x: self.x,
                y: self.y,
                edge,
            });
        }
        Ok(())
    }

    /// Returns the horizontal coordinate.
    pub fn x(&self) -> u16 {
        self.x
    }

    /// Returns the vertical coordinate.
    pub fn y(&self) -> u16 {
        self.y
    }

    /// Signed per-axis offsets from `self` to `other`.
    pub fn offset_to(&self, other: &Point) -> (i32, i32) {
        (
            i32::from(other.x) - i32::from(self.x),
            i32::from(other.y) - i32::from(self.y),
        )
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
