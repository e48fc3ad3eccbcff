//! Branch-and-bound over square cells with a max-heap frontier.

use std::collections::BinaryHeap;

use nalgebra::Vector2;
use tracing::debug;

use crate::error::LabelError;
use crate::geom::{centroid, signed_distance, Bounds, Polygon};

use super::types::{Cell, Label, Queued, SearchCfg, SearchStats};

/// Pole of inaccessibility of `poly`, within `precision`.
///
/// Convenience over `polylabel_with_cfg` with the default queue key.
pub fn polylabel(poly: &Polygon, precision: f64) -> Result<Vector2<f64>, LabelError> {
    polylabel_with_cfg(poly, SearchCfg::with_precision(precision)).map(|label| label.point)
}

/// Run the search and return the best point with its distance and counters.
///
/// Pre: `cfg.precision` positive and finite (else `InvalidPrecision`).
/// Post: `signed_distance(point) >= optimum - precision`.
///
/// A zero-width or zero-height outer ring short-circuits to the bounding-box
/// minimum corner without searching.
pub fn polylabel_with_cfg(poly: &Polygon, cfg: SearchCfg) -> Result<Label, LabelError> {
    if !(cfg.precision.is_finite() && cfg.precision > 0.0) {
        return Err(LabelError::InvalidPrecision(cfg.precision));
    }
    let bounds = Bounds::of_outer_ring(poly);
    if bounds.is_degenerate() {
        let distance = signed_distance(bounds.min, poly);
        debug!(
            x = bounds.min.x,
            y = bounds.min.y,
            distance,
            "degenerate bounds, skipping search"
        );
        return Ok(Label {
            point: bounds.min,
            distance,
            stats: SearchStats {
                cells_evaluated: 1,
                ..SearchStats::default()
            },
        });
    }
    let mut runner = Runner::seed(poly, bounds, cfg);
    while runner.step() {}
    Ok(runner.finish())
}

/// Search state for one call: frontier, best-so-far, counters.
pub(crate) struct Runner<'a> {
    poly: &'a Polygon,
    cfg: SearchCfg,
    queue: BinaryHeap<Queued>,
    best: Cell,
    stats: SearchStats,
}

impl<'a> Runner<'a> {
    /// Tile the bounds with squares of the shorter side and pick the initial best
    /// among the centroid and the box center. Bounds must be non-degenerate.
    pub(crate) fn seed(poly: &'a Polygon, bounds: Bounds, cfg: SearchCfg) -> Self {
        debug_assert!(!bounds.is_degenerate());
        let (c, _) = centroid(poly);
        let mut best = Cell::new(c, 0.0, poly);
        // Exact for rectangles, where the centroid may carry rounding error.
        let bbox_cell = Cell::new(bounds.center(), 0.0, poly);
        if bbox_cell.distance > best.distance {
            best = bbox_cell;
        }
        let mut runner = Self {
            poly,
            cfg,
            queue: BinaryHeap::new(),
            best,
            stats: SearchStats {
                cells_evaluated: 2,
                ..SearchStats::default()
            },
        };

        let size = bounds.width().min(bounds.height());
        let h = size / 2.0;
        // Integer tile counts: far from the origin `x += size` can round back to `x`.
        let nx = (bounds.width() / size).ceil() as usize;
        let ny = (bounds.height() / size).ceil() as usize;
        for i in 0..nx {
            let x = bounds.min.x + i as f64 * size;
            for j in 0..ny {
                let y = bounds.min.y + j as f64 * size;
                runner.push(Cell::new(Vector2::new(x + h, y + h), h, poly));
            }
        }
        runner
    }

    fn push(&mut self, cell: Cell) {
        self.queue.push(Queued {
            key: self.cfg.queue_key.of(&cell),
            cell,
        });
        self.stats.cells_evaluated += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.queue.len());
    }

    /// Pop one cell, update the best, then prune or split it.
    /// Returns `false` once the frontier is empty.
    pub(crate) fn step(&mut self) -> bool {
        let Some(Queued { cell, .. }) = self.queue.pop() else {
            return false;
        };
        if cell.distance > self.best.distance {
            self.best = cell;
            self.stats.best_updates += 1;
        }
        if cell.max - self.best.distance <= self.cfg.precision {
            self.stats.cells_pruned += 1;
            return true;
        }
        self.stats.cells_split += 1;
        for child in cell.split(self.poly) {
            self.push(child);
        }
        true
    }

    #[inline]
    pub(crate) fn best(&self) -> &Cell {
        &self.best
    }

    #[inline]
    pub(crate) fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn finish(self) -> Label {
        debug!(
            x = self.best.center.x,
            y = self.best.center.y,
            distance = self.best.distance,
            precision = self.cfg.precision,
            queue_key = self.cfg.queue_key.as_str(),
            evaluated = self.stats.cells_evaluated,
            split = self.stats.cells_split,
            pruned = self.stats.cells_pruned,
            "search done"
        );
        Label {
            point: self.best.center,
            distance: self.best.distance,
            stats: self.stats,
        }
    }
}
