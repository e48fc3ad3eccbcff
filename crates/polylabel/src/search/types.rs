//! Cells, queue entries, configuration and results of the search.
//!
//! Kept small and explicit so `engine` reads as the algorithm only.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::geom::{signed_distance, Polygon};

/// Square candidate region, evaluated once at its center.
///
/// Invariant: `max >= distance`, with equality only for `half == 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub center: Vector2<f64>,
    /// Half the side length.
    pub half: f64,
    /// Signed distance of `center` to the polygon boundary.
    pub distance: f64,
    /// Best distance any point in the square could reach: `distance + half·√2`.
    /// Valid because the signed distance is 1-Lipschitz.
    pub max: f64,
}

impl Cell {
    pub fn new(center: Vector2<f64>, half: f64, poly: &Polygon) -> Self {
        let distance = signed_distance(center, poly);
        Self {
            center,
            half,
            distance,
            max: distance + half * std::f64::consts::SQRT_2,
        }
    }

    /// The four quadrant children, each with half the `half`.
    /// Order: (-,-), (+,-), (-,+), (+,+).
    pub fn split(&self, poly: &Polygon) -> [Cell; 4] {
        let h = self.half / 2.0;
        let c = self.center;
        [
            Cell::new(Vector2::new(c.x - h, c.y - h), h, poly),
            Cell::new(Vector2::new(c.x + h, c.y - h), h, poly),
            Cell::new(Vector2::new(c.x - h, c.y + h), h, poly),
            Cell::new(Vector2::new(c.x + h, c.y + h), h, poly),
        ]
    }
}

/// Which cell value orders the frontier (largest popped first).
///
/// `Distance` is the default and keeps the established behavior. `UpperBound`
/// is the canonical ordering by potential (`max`); it usually evaluates fewer
/// cells. Both return a point within `precision` of the optimum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueueKey {
    #[default]
    Distance,
    UpperBound,
}

impl QueueKey {
    #[inline]
    pub(crate) fn of(self, cell: &Cell) -> f64 {
        match self {
            QueueKey::Distance => cell.distance,
            QueueKey::UpperBound => cell.max,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueueKey::Distance => "distance",
            QueueKey::UpperBound => "upper-bound",
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchCfg {
    /// Tolerance on the optimality of the returned point (same units as the
    /// coordinates). Must be positive and finite.
    pub precision: f64,
    /// Frontier ordering; keep the default outside of ablations/benchmarks.
    pub queue_key: QueueKey,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            precision: 1.0,
            queue_key: QueueKey::Distance,
        }
    }
}

impl SearchCfg {
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }
}

/// Counters collected over one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distance evaluations (tiles, seeds and children).
    pub cells_evaluated: usize,
    /// Cells popped and subdivided.
    pub cells_split: usize,
    /// Cells popped and discarded by the bound test.
    pub cells_pruned: usize,
    /// Times a popped cell replaced the best-so-far.
    pub best_updates: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Search result: best point, its signed distance, and counters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub point: Vector2<f64>,
    pub distance: f64,
    pub stats: SearchStats,
}

/// Frontier entry ordered by `key` alone.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Queued {
    pub key: f64,
    pub cell: Cell,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: larger key pops first.
        self.key.partial_cmp(&other.key).unwrap_or(Ordering::Equal)
    }
}
