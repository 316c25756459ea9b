//! The live set of candidates a future path could still depart from.
//!
//! Candidates are kept in a max-heap on `cost_min`, so the ones most likely
//! to be dominated sit at the top and pruning pops them until the top
//! survives. Queries scan the whole heap, which stays small because every
//! dominated candidate is dropped as soon as the threshold tightens.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{Point, Waypoint};

use super::candidate::Candidate;
use super::config::CourseConfig;

/// Whether dominated candidates are discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PruneMode {
    /// Reject and prune candidates that can never be optimal.
    #[default]
    Dominance,
    /// Keep every candidate. Quadratic, used as a reference.
    Disabled,
}

/// What happened to a waypoint fed to the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The new candidate joined the frontier, evicting `pruned` others.
    Accepted { pruned: usize },
    /// The new candidate was dominated on arrival.
    Rejected,
}

/// Counters describing one solved case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Waypoints fed, excluding the implicit corners.
    pub waypoints: usize,
    /// Candidates that joined the frontier.
    pub accepted: usize,
    /// Candidates dominated on arrival.
    pub rejected: usize,
    /// Candidates evicted after joining.
    pub pruned: usize,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
}

/// Result of one case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Minimum total time from start to end.
    pub cost: f64,
    pub stats: SolveStats,
}

/// Heap entry ordered by `cost_min`.
#[derive(Debug, Clone, Copy)]
struct ByCostMin(Candidate);

impl PartialEq for ByCostMin {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByCostMin {}

impl PartialOrd for ByCostMin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByCostMin {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cost_min().total_cmp(&other.0.cost_min())
    }
}

/// Incremental optimizer for one case.
///
/// Feed waypoints in arrival order with [`Frontier::feed`], then call
/// [`Frontier::finish`]. A frontier is consumed by `finish`, so no state can
/// leak into the next case.
#[derive(Debug)]
pub struct Frontier<'a> {
    config: &'a CourseConfig,
    mode: PruneMode,
    heap: BinaryHeap<ByCostMin>,

    /// Smallest `cost_max` among candidates that have held the minimum
    /// `cost_min`. Anything with a `cost_min` above it is dominated.
    acceptable_cost: f64,

    /// Smallest `cost_min` of any accepted candidate.
    min_cost_min: f64,

    /// Penalties of every waypoint seen, visited or not.
    total_penalty: u64,

    stats: SolveStats,
}

impl<'a> Frontier<'a> {
    /// Create a frontier seeded with the start candidate.
    pub fn new(config: &'a CourseConfig, mode: PruneMode) -> Self {
        let start = Candidate::start(config);
        let mut heap = BinaryHeap::new();
        heap.push(ByCostMin(start));

        Self {
            config,
            mode,
            heap,
            acceptable_cost: start.cost_max(),
            min_cost_min: start.cost_min(),
            total_penalty: 0,
            stats: SolveStats {
                peak_frontier: 1,
                ..SolveStats::default()
            },
        }
    }

    /// Cheapest cost of reaching `point` directly from any live candidate.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty, which the dominance rules never
    /// allow.
    pub fn best_cost_to(&self, point: Point) -> f64 {
        assert!(!self.heap.is_empty(), "frontier emptied before {point}");
        self.heap
            .iter()
            .map(|entry| entry.0.cost_to(self.config, point))
            .fold(f64::INFINITY, f64::min)
    }

    /// Process the next waypoint of the case.
    pub fn feed(&mut self, waypoint: Waypoint) -> Admission {
        let best_cost = self.best_cost_to(waypoint.position());
        self.total_penalty += u64::from(waypoint.penalty());
        self.stats.waypoints += 1;

        let candidate = Candidate::new(self.config, waypoint, best_cost);

        if self.mode == PruneMode::Dominance && candidate.is_dominated_by(self.acceptable_cost) {
            trace!(
                waypoint = %waypoint,
                cost_min = candidate.cost_min(),
                acceptable = self.acceptable_cost,
                "Rejected dominated candidate"
            );
            self.stats.rejected += 1;
            return Admission::Rejected;
        }

        let mut pruned = 0;
        if candidate.cost_min() <= self.min_cost_min {
            self.min_cost_min = candidate.cost_min();
            if candidate.cost_max() < self.acceptable_cost {
                self.acceptable_cost = candidate.cost_max();
                pruned = self.prune();
            }
        }

        self.heap.push(ByCostMin(candidate));
        self.stats.accepted += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.heap.len());

        Admission::Accepted { pruned }
    }

    /// Drop every candidate dominated under the current threshold.
    fn prune(&mut self) -> usize {
        if self.mode == PruneMode::Disabled {
            return 0;
        }

        let mut pruned = 0;
        while let Some(top) = self.heap.peek() {
            if !top.0.is_dominated_by(self.acceptable_cost) {
                break;
            }
            trace!(
                waypoint = %top.0.waypoint(),
                cost_min = top.0.cost_min(),
                acceptable = self.acceptable_cost,
                "Pruned dominated candidate"
            );
            self.heap.pop();
            pruned += 1;
        }

        self.stats.pruned += pruned;
        pruned
    }

    /// Complete the case by travelling on to the end corner.
    pub fn finish(self) -> Solution {
        let end = self.config.end().position();
        let cost = self.best_cost_to(end) + self.total_penalty as f64;

        debug!(
            waypoints = self.stats.waypoints,
            accepted = self.stats.accepted,
            rejected = self.stats.rejected,
            pruned = self.stats.pruned,
            peak_frontier = self.stats.peak_frontier,
            cost,
            "Case solved"
        );

        Solution {
            cost,
            stats: self.stats,
        }
    }

    /// Number of live candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True only if the dominance rules have been violated.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Live candidates, in no particular order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.heap.iter().map(|entry| &entry.0)
    }

    pub fn acceptable_cost(&self) -> f64 {
        self.acceptable_cost
    }

    pub fn min_cost_min(&self) -> f64 {
        self.min_cost_min
    }

    pub fn total_penalty(&self) -> u64 {
        self.total_penalty
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn mode(&self) -> PruneMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(x: u16, y: u16, penalty: u32) -> Waypoint {
        Waypoint::new(Point::new(x, y), penalty)
    }

    #[test]
    fn seeded_with_start() {
        let config = CourseConfig::default();
        let frontier = Frontier::new(&config, PruneMode::Dominance);

        assert_eq!(frontier.len(), 1);
        assert!(!frontier.is_empty());
        assert_eq!(frontier.mode(), PruneMode::Dominance);
        let start = frontier.candidates().next().unwrap();
        assert_eq!(*start, Candidate::start(&config));
        assert_eq!(frontier.acceptable_cost(), start.cost_max());
        assert_eq!(frontier.min_cost_min(), start.cost_min());
    }

    #[test]
    fn empty_case_is_direct_hop_with_one_dwell() {
        let config = CourseConfig::default();
        let frontier = Frontier::new(&config, PruneMode::Dominance);
        let solution = frontier.finish();

        let expected = Candidate::start(&config).cost_to(&config, Point::new(100, 100));
        assert_eq!(solution.cost, expected);
        assert!((solution.cost - 80.710_678).abs() < 1e-6);
        assert_eq!(solution.stats.waypoints, 0);
    }

    #[test]
    fn penalty_accumulates_unconditionally() {
        let config = CourseConfig::default();
        let mut frontier = Frontier::new(&config, PruneMode::Dominance);

        frontier.feed(waypoint(50, 50, 20));
        frontier.feed(waypoint(10, 90, 7));
        frontier.feed(waypoint(99, 1, 0));

        assert_eq!(frontier.total_penalty(), 27);
    }

    #[test]
    fn cheap_waypoint_prunes_costly_ones() {
        let config = CourseConfig::default();
        let mut frontier = Frontier::new(&config, PruneMode::Dominance);

        // A huge penalty makes visiting this waypoint far cheaper in relative
        // terms than anything before it, so the start is dominated.
        let admission = frontier.feed(waypoint(50, 50, 1000));

        assert_eq!(admission, Admission::Accepted { pruned: 1 });
        assert_eq!(frontier.len(), 1);
        assert_eq!(
            frontier.candidates().next().unwrap().waypoint(),
            waypoint(50, 50, 1000)
        );
        assert_eq!(frontier.stats().pruned, 1);
    }

    #[test]
    fn dominated_waypoint_is_rejected() {
        let config = CourseConfig::default();
        let mut frontier = Frontier::new(&config, PruneMode::Dominance);

        frontier.feed(waypoint(50, 50, 1000));
        // Zero-penalty stop right after: its relative cost carries an extra
        // dwell and cannot beat departing from the previous stop.
        let admission = frontier.feed(waypoint(0, 100, 0));

        assert_eq!(admission, Admission::Rejected);
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.stats().rejected, 1);
    }

    #[test]
    fn disabled_mode_keeps_everything() {
        let config = CourseConfig::default();
        let mut frontier = Frontier::new(&config, PruneMode::Disabled);
        assert_eq!(frontier.mode(), PruneMode::Disabled);

        frontier.feed(waypoint(50, 50, 1000));
        frontier.feed(waypoint(0, 100, 0));
        frontier.feed(waypoint(3, 3, 3));

        assert_eq!(frontier.len(), 4);
        assert_eq!(frontier.stats().pruned, 0);
        assert_eq!(frontier.stats().rejected, 0);
        assert_eq!(frontier.stats().peak_frontier, 4);
    }

    #[test]
    fn live_candidates_respect_threshold() {
        let config = CourseConfig::default();
        let mut frontier = Frontier::new(&config, PruneMode::Dominance);

        let stops = [
            (30, 30, 90),
            (60, 60, 80),
            (10, 90, 100),
            (4, 2, 7),
            (4, 2, 9),
            (95, 12, 1),
            (50, 50, 60),
        ];
        for (x, y, p) in stops {
            frontier.feed(waypoint(x, y, p));
            for c in frontier.candidates() {
                assert!(c.cost_min() <= frontier.acceptable_cost());
                assert!(frontier.min_cost_min() <= c.cost_min());
            }
        }
    }

    #[test]
    fn best_cost_to_takes_minimum() {
        let config = CourseConfig::default();
        let mut frontier = Frontier::new(&config, PruneMode::Disabled);
        frontier.feed(waypoint(90, 90, 30));

        let target = Point::new(100, 100);
        let expected = frontier
            .candidates()
            .map(|c| c.cost_to(&config, target))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(frontier.best_cost_to(target), expected);
    }
}
