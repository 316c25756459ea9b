//! Frontier entries: visited waypoints with their optimal arrival cost.

use crate::domain::{Point, Waypoint};

use super::bounds::{time_max, time_min, travel_time};
use super::config::CourseConfig;

/// A waypoint that may be visited, paired with the best cost of any path
/// from the start that ends by visiting it.
///
/// Costs are relative: every penalty is added once at the end of the case,
/// so visiting a waypoint cancels its own penalty here instead of tracking
/// which waypoints were skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    waypoint: Waypoint,
    best_cost: f64,
    /// Cost carried to any later point when travelling on from here.
    invariant_cost: f64,
    cost_min: f64,
    cost_max: f64,
}

impl Candidate {
    /// Build a candidate for `waypoint` reached at `best_cost`.
    pub fn new(config: &CourseConfig, waypoint: Waypoint, best_cost: f64) -> Self {
        let invariant_cost = best_cost - f64::from(waypoint.penalty()) + config.delay;
        let position = waypoint.position();
        let cost_min = invariant_cost + time_min(config, position);
        let cost_max = invariant_cost + time_max(config, position);

        assert!(
            cost_min.is_finite() && cost_max.is_finite(),
            "non-finite bounds for {waypoint}"
        );
        debug_assert!(cost_min <= cost_max);

        Self {
            waypoint,
            best_cost,
            invariant_cost,
            cost_min,
            cost_max,
        }
    }

    /// The candidate every case starts from.
    pub fn start(config: &CourseConfig) -> Self {
        Self::new(config, config.start(), 0.0)
    }

    /// Cost of reaching `point` by travelling directly from this candidate,
    /// skipping everything in between.
    pub fn cost_to(&self, config: &CourseConfig, point: Point) -> f64 {
        self.invariant_cost + travel_time(config, self.waypoint.position(), point)
    }

    pub fn waypoint(&self) -> Waypoint {
        self.waypoint
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    pub fn invariant_cost(&self) -> f64 {
        self.invariant_cost
    }

    /// Lower bound of [`Candidate::cost_to`] over the region.
    pub fn cost_min(&self) -> f64 {
        self.cost_min
    }

    /// Upper bound of [`Candidate::cost_to`] over the region.
    pub fn cost_max(&self) -> f64 {
        self.cost_max
    }

    /// True when this candidate can never beat one whose `cost_max` is
    /// `threshold`.
    pub fn is_dominated_by(&self, threshold: f64) -> bool {
        self.cost_min > threshold
    }
}
