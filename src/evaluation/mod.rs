//! Tour length evaluation.
//!
//! Sums geodesic legs along an ordering, either directly from points or
//! from a precomputed distance matrix.

mod evaluator;

pub use evaluator::{order_distance, path_distance, tour_distance, PathEvaluator};
