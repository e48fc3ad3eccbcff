//! Pole-of-inaccessibility search: square cells, max-heap, bound pruning.
//!
//! Purpose
//! - Cover the outer ring's bounding box with squares, evaluate each at its
//!   center, and keep splitting only the squares whose upper bound can still
//!   beat the best point found by more than `precision`.
//!
//! Phases
//! - SEED: tile the box, best := better of centroid and box center.
//! - LOOP: pop, maybe update best, prune if `max - best <= precision`, else
//!   split into four and push the children.
//! - DONE: frontier empty; every branch was pruned.
//!
//! Ordering
//! - The frontier pops the largest `distance` first (`QueueKey::Distance`).
//!   The canonical formulation pops the largest `max` instead; that ordering is
//!   available as `QueueKey::UpperBound`. Correctness rests on the prune test
//!   and the full initial tiling, not on the pop order.
//!
//! References
//! - Code cross-refs: `geom::{signed_distance, centroid, Bounds}`

mod engine;
mod types;

pub use engine::{polylabel, polylabel_with_cfg};
pub use types::{Cell, Label, QueueKey, SearchCfg, SearchStats};
