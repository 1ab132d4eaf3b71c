//! Path and tour length accumulation.

use crate::distance::{haversine_between, DistanceMatrix};
use crate::models::{Point, TourKind};

/// Sum of consecutive-pair distances along `order`, in km.
///
/// Orders of length 0 or 1 have length 0.
///
/// # Panics
///
/// Panics if an index in `order` is out of bounds for `points`.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Point;
/// use u_itinerary::evaluation::{path_distance, tour_distance};
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0).unwrap(),
///     Point::new("b", 0.0, 1.0).unwrap(),
///     Point::new("c", 0.0, 2.0).unwrap(),
/// ];
/// let open = path_distance(&[0, 1, 2], &points);
/// let closed = tour_distance(&[0, 1, 2], &points);
/// assert!(closed > open);
/// assert_eq!(path_distance(&[1], &points), 0.0);
/// ```
pub fn path_distance(order: &[usize], points: &[Point]) -> f64 {
    accumulate(order, |a, b| haversine_between(&points[a], &points[b]), false)
}

/// Like [`path_distance`], plus the leg from the last point back to the first.
pub fn tour_distance(order: &[usize], points: &[Point]) -> f64 {
    accumulate(order, |a, b| haversine_between(&points[a], &points[b]), true)
}

/// Length of `order` under the rule for `kind`.
pub fn order_distance(order: &[usize], points: &[Point], kind: TourKind) -> f64 {
    match kind {
        TourKind::Closed => tour_distance(order, points),
        TourKind::Open => path_distance(order, points),
    }
}

/// Scores candidate orders against a precomputed [`DistanceMatrix`].
///
/// Summation order is the same as [`path_distance`]/[`tour_distance`], so a
/// matrix built with [`DistanceMatrix::from_points`] gives bit-identical
/// totals.
pub struct PathEvaluator<'a> {
    distances: &'a DistanceMatrix,
    kind: TourKind,
}

impl<'a> PathEvaluator<'a> {
    /// Creates a new evaluator for the given matrix and tour rule.
    pub fn new(distances: &'a DistanceMatrix, kind: TourKind) -> Self {
        Self { distances, kind }
    }

    /// Tour rule this evaluator applies; the engine stamps it on the result.
    pub fn kind(&self) -> TourKind {
        self.kind
    }

    /// Total length of `order` in km.
    pub fn evaluate(&self, order: &[usize]) -> f64 {
        accumulate(
            order,
            |a, b| self.distances.get(a, b),
            self.kind == TourKind::Closed,
        )
    }
}

fn accumulate(order: &[usize], dist: impl Fn(usize, usize) -> f64, closed: bool) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for w in order.windows(2) {
        total += dist(w[0], w[1]);
    }
    if closed {
        total += dist(order[order.len() - 1], order[0]);
    }
    total
}
