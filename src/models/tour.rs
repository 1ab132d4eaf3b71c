//! Tour (ordering result) types.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::distance::haversine_between;

/// Whether a tour returns to its first stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TourKind {
    /// Total distance includes the last → first leg.
    Closed,
    /// No return leg.
    Open,
}

/// An ordered visiting sequence over the input points.
///
/// `order` is always a permutation of the solver's input: same length, no
/// duplicates, no omissions. `indices[i]` is the position of `order[i]` in
/// the input slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    order: Vec<Point>,
    indices: Vec<usize>,
    total_distance_km: f64,
    kind: TourKind,
}

/// Origin/destination/waypoints split handed to a driving-directions provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsQuery {
    pub origin: Point,
    pub destination: Point,
    pub waypoints: Vec<Point>,
}

impl Tour {
    /// Builds a tour from input indices. Callers guarantee `indices` is a
    /// permutation of `0..points.len()` and `total_distance_km` was computed
    /// for it with the rule matching `kind`.
    pub(crate) fn from_indices(
        points: &[Point],
        indices: Vec<usize>,
        kind: TourKind,
        total_distance_km: f64,
    ) -> Self {
        let order = indices.iter().map(|&i| points[i].clone()).collect();
        Self {
            order,
            indices,
            total_distance_km,
            kind,
        }
    }

    /// The empty tour (no points, zero distance).
    pub fn empty(kind: TourKind) -> Self {
        Self {
            order: Vec::new(),
            indices: Vec::new(),
            total_distance_km: 0.0,
            kind,
        }
    }

    /// Points in visiting order.
    pub fn order(&self) -> &[Point] {
        &self.order
    }

    /// Visiting order as indices into the input slice.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Total geodesic length in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn kind(&self) -> TourKind {
        self.kind
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Point identifiers in visiting order.
    pub fn ids(&self) -> Vec<&str> {
        self.order.iter().map(Point::id).collect()
    }

    /// Distance of each leg in km, including the return leg for closed tours.
    pub fn legs(&self) -> Vec<f64> {
        let n = self.order.len();
        if n < 2 {
            return Vec::new();
        }
        let mut legs: Vec<f64> = self
            .order
            .windows(2)
            .map(|w| haversine_between(&w[0], &w[1]))
            .collect();
        if self.kind == TourKind::Closed {
            legs.push(haversine_between(&self.order[n - 1], &self.order[0]));
        }
        legs
    }

    /// Splits the tour into a directions request: origin is the first stop,
    /// destination the last, waypoints everything in between.
    ///
    /// The split is the same for closed tours; use [`Tour::return_leg`] to
    /// route the way back. Returns `None` for an empty tour.
    pub fn directions_query(&self) -> Option<DirectionsQuery> {
        let (origin, rest) = self.order.split_first()?;
        let (destination, waypoints) = match rest.split_last() {
            Some((last, between)) => (last.clone(), between.to_vec()),
            None => (origin.clone(), Vec::new()),
        };
        Some(DirectionsQuery {
            origin: origin.clone(),
            destination,
            waypoints,
        })
    }

    /// The last → first leg counted in a closed tour's total, as
    /// `(from, to)`. `None` for open paths and tours with fewer than 2 stops.
    pub fn return_leg(&self) -> Option<(&Point, &Point)> {
        if self.kind != TourKind::Closed || self.order.len() < 2 {
            return None;
        }
        Some((&self.order[self.order.len() - 1], &self.order[0]))
    }
}
