//! Brute-force route ordering.
//!
//! # Algorithm
//!
//! Partition the input into an optional fixed start, an optional fixed end,
//! and the free points. Every permutation of the free points is scored as
//! `[start?] + perm + [end?]` and the strictly shortest one is kept, so the
//! first minimal candidate in enumeration order wins ties.
//!
//! With no anchors the tour is closed and point 0 serves as the rotation
//! anchor: every closed tour has a rotation starting there, so fixing it
//! loses nothing and divides the search by `n`.
//!
//! # Complexity
//!
//! O(k!·n) for `k` free points. Practical up to about 10 free points; bounding
//! `k` is the caller's job. There is no timeout and no approximate fallback.

use crate::distance::DistanceMatrix;
use crate::error::{AnchorRole, Result, RoutingError};
use crate::evaluation::PathEvaluator;
use crate::models::{Point, SolveOptions, SolveRequest, Tour, TourKind};

use super::permutation::{permutation_count, Permutations};

/// Which anchor combination a solve runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    /// No anchors; closed tour from point 0.
    FreeTour,
    /// Fixed first stop, free last stop; open path.
    FixedStart,
    /// Fixed first and last stop; open path. When both name the same point
    /// it is only placed once, at the front.
    FixedStartEnd,
    /// Fixed last stop only; open path.
    FixedEnd,
}

/// Resolved anchors and free indices for one solve.
#[derive(Debug, Clone)]
struct Plan {
    variant: Variant,
    start: Option<usize>,
    end: Option<usize>,
    free: Vec<usize>,
}

impl Plan {
    fn resolve(points: &[Point], options: &SolveOptions) -> Result<Self> {
        let n = points.len();
        if options.fixed_start_id.is_some() && options.fixed_end_id.is_some() && n < 2 {
            return Err(RoutingError::insufficient_points(2, n));
        }

        let start = options
            .fixed_start_id
            .as_deref()
            .map(|id| find_anchor(points, id, AnchorRole::Start))
            .transpose()?;
        let end = options
            .fixed_end_id
            .as_deref()
            .map(|id| find_anchor(points, id, AnchorRole::End))
            .transpose()?;

        let (variant, start, end) = match (start, end) {
            (None, None) => (Variant::FreeTour, (n > 0).then_some(0), None),
            (Some(s), None) => (Variant::FixedStart, Some(s), None),
            (Some(s), Some(e)) if s == e => (Variant::FixedStartEnd, Some(s), None),
            (Some(s), Some(e)) => (Variant::FixedStartEnd, Some(s), Some(e)),
            (None, Some(e)) => (Variant::FixedEnd, None, Some(e)),
        };

        let free = (0..n)
            .filter(|&i| Some(i) != start && Some(i) != end)
            .collect();

        Ok(Self {
            variant,
            start,
            end,
            free,
        })
    }

    fn kind(&self) -> TourKind {
        match self.variant {
            Variant::FreeTour => TourKind::Closed,
            Variant::FixedStart | Variant::FixedStartEnd | Variant::FixedEnd => TourKind::Open,
        }
    }

    /// Writes `[start?] + middle + [end?]` into `out`.
    fn assemble(&self, middle: &[usize], out: &mut Vec<usize>) {
        out.clear();
        out.extend(self.start);
        out.extend_from_slice(middle);
        out.extend(self.end);
    }
}

fn find_anchor(points: &[Point], id: &str, role: AnchorRole) -> Result<usize> {
    points
        .iter()
        .position(|p| p.id() == id)
        .ok_or_else(|| RoutingError::invalid_reference(role, id))
}

/// Finds the shortest visiting order over `points`.
///
/// See the [module docs](self) for the variants selected by `options`.
///
/// # Errors
///
/// - [`RoutingError::InvalidInput`] if any point has a bad coordinate.
/// - [`RoutingError::InsufficientPoints`] if both a start and an end are
///   fixed but fewer than 2 points are given.
/// - [`RoutingError::InvalidReference`] if a fixed id matches no point.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Point, SolveOptions, TourKind};
/// use u_itinerary::ordering::solve_ordering;
///
/// let points = vec![
///     Point::new("hotel", 13.7563, 100.5018).unwrap(),
///     Point::new("temple", 13.7466, 100.5348).unwrap(),
///     Point::new("market", 13.7997, 100.5500).unwrap(),
///     Point::new("airport", 13.6900, 100.7501).unwrap(),
/// ];
/// let opts = SolveOptions::default()
///     .with_fixed_start("hotel")
///     .with_fixed_end("airport");
///
/// let tour = solve_ordering(&points, &opts).unwrap();
/// assert_eq!(tour.kind(), TourKind::Open);
/// assert_eq!(tour.order()[0].id(), "hotel");
/// assert_eq!(tour.order()[3].id(), "airport");
/// ```
pub fn solve_ordering(points: &[Point], options: &SolveOptions) -> Result<Tour> {
    for p in points {
        p.validate()?;
    }

    let plan = Plan::resolve(points, options)?;
    if points.is_empty() {
        return Ok(Tour::empty(plan.kind()));
    }

    let k = plan.free.len();
    log::debug!(
        "ordering.solve: start n={} free={k} variant={:?} candidates={}",
        points.len(),
        plan.variant,
        permutation_count(k).map_or_else(|| "overflow".to_string(), |c| c.to_string()),
    );

    let distances = DistanceMatrix::from_points(points);
    let evaluator = PathEvaluator::new(&distances, plan.kind());

    let (order, total) = if k < 2 {
        // At most one candidate.
        let mut order = Vec::with_capacity(points.len());
        plan.assemble(&plan.free, &mut order);
        let total = evaluator.evaluate(&order);
        (order, total)
    } else {
        search(&plan, &evaluator)
    };

    log::debug!(
        "ordering.solve: done variant={:?} total_km={total:.3}",
        plan.variant
    );
    Ok(Tour::from_indices(points, order, evaluator.kind(), total))
}

/// Solves a request received from the API layer.
pub fn solve(request: &SolveRequest) -> Result<Tour> {
    solve_ordering(&request.points, &request.options)
}

/// Scores every permutation of the free points and keeps the first minimum.
fn search(plan: &Plan, evaluator: &PathEvaluator<'_>) -> (Vec<usize>, f64) {
    let n = plan.free.len() + usize::from(plan.start.is_some()) + usize::from(plan.end.is_some());
    let mut candidate = Vec::with_capacity(n);
    let mut best_order = Vec::with_capacity(n);
    let mut best = f64::INFINITY;

    let mut perms = Permutations::new(plan.free.clone());
    while let Some(perm) = perms.next_permutation() {
        plan.assemble(perm, &mut candidate);
        let d = evaluator.evaluate(&candidate);
        if best_order.is_empty() || d < best {
            log::trace!("ordering.search: improved total_km={d:.3} order={candidate:?}");
            best = d;
            best_order.clone_from(&candidate);
        }
    }
    (best_order, best)
}
