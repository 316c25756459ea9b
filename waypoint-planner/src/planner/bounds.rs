//! Travel times and their bounds over the operating region.
//!
//! `time_min` and `time_max` bound the travel time from a fixed point to any
//! point of the square. The frontier's pruning is only correct while these
//! are true bounds, so they are kept deliberately simple.

use crate::domain::Point;

use super::config::CourseConfig;

/// Travel time for a displacement of `(dx, dy)`.
fn time_for(config: &CourseConfig, dx: i32, dy: i32) -> f64 {
    let (dx, dy) = (i64::from(dx), i64::from(dy));
    // sqrt of the exact integer sum; hypot is slower and no more accurate here
    let time = ((dx * dx + dy * dy) as f64).sqrt() / config.speed;
    assert!(time.is_finite(), "non-finite travel time for ({dx}, {dy})");
    time
}

/// Time to travel in a straight line from `a` to `b`.
pub fn travel_time(config: &CourseConfig, a: Point, b: Point) -> f64 {
    let (dx, dy) = a.offset_to(&b);
    time_for(config, dx, dy)
}

/// Per-axis distance to the farther side of the region.
fn axis_max(edge: u16, c: u16) -> i32 {
    let c = i32::from(c);
    let edge = i32::from(edge);
    (edge - c).max(c)
}

/// Lower bound on `travel_time(p, q)` for any `q` a later query may ask
/// about.
///
/// A query point can share either coordinate with `p`, so per axis the
/// nearest reachable distance is zero. The only floor is the configured
/// minimum separation between distinct stops.
pub fn time_min(config: &CourseConfig, _p: Point) -> f64 {
    config.min_separation / config.speed
}

/// Upper bound on `travel_time(p, q)` for any `q` in the region: the
/// distance to the farthest corner.
pub fn time_max(config: &CourseConfig, p: Point) -> f64 {
    time_for(
        config,
        axis_max(config.edge, p.x()),
        axis_max(config.edge, p.y()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CourseConfig {
        CourseConfig::default()
    }

    #[test]
    fn travel_time_is_distance_over_speed() {
        let config = config();
        let t = travel_time(&config, Point::new(0, 0), Point::new(30, 40));
        assert_eq!(t, 25.0);
    }

    #[test]
    fn travel_time_is_symmetric() {
        let config = config();
        let a = Point::new(12, 87);
        let b = Point::new(66, 3);
        assert_eq!(travel_time(&config, a, b), travel_time(&config, b, a));
    }

    #[test]
    fn travel_time_to_self_is_zero() {
        let config = config();
        let p = Point::new(4, 2);
        assert_eq!(travel_time(&config, p, p), 0.0);
    }

    #[test]
    fn corner_to_corner() {
        let config = config();
        let t = travel_time(&config, Point::new(0, 0), Point::new(100, 100));
        assert!((t - 70.710_678_118_654_76).abs() < 1e-12);
    }

    #[test]
    fn time_max_reaches_farthest_corner() {
        let config = config();

        let p = Point::new(10, 80);
        let expected = travel_time(&config, p, Point::new(100, 0));
        assert_eq!(time_max(&config, p), expected);

        let centre = Point::new(50, 50);
        let expected = travel_time(&config, centre, Point::new(0, 0));
        assert_eq!(time_max(&config, centre), expected);
    }

    #[test]
    fn time_min_uses_separation_floor() {
        assert_eq!(time_min(&config(), Point::new(50, 50)), 0.0);

        let spaced = CourseConfig::new(100, 2.0, 10.0, 1.0);
        assert_eq!(time_min(&spaced, Point::new(50, 50)), 0.5);
    }

    #[test]
    fn bounds_hold_over_whole_grid() {
        let config = CourseConfig::new(12, 1.5, 0.0, 0.0);

        for px in 0..=12 {
            for py in 0..=12 {
                let p = Point::new(px, py);
                let lo = time_min(&config, p);
                let hi = time_max(&config, p);
                assert!(lo <= hi);
                assert!(hi <= config.diagonal() / config.speed + 1e-12);

                for qx in 0..=12 {
                    for qy in 0..=12 {
                        let t = travel_time(&config, p, Point::new(qx, qy));
                        assert!(lo <= t, "{p:?} -> ({qx},{qy}) below lower bound");
                        assert!(t <= hi, "{p:?} -> ({qx},{qy}) above upper bound");
                    }
                }
            }
        }
    }
}
