//! Dense geodesic distance matrix.

use super::haversine_between;
use crate::models::Point;

/// Pairwise Haversine distances (km) for one solve, row-major.
///
/// Built once so the permutation search reads distances instead of
/// re-evaluating trigonometry for every candidate.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Point;
/// use u_itinerary::distance::{DistanceMatrix, haversine_km};
///
/// let points = vec![
///     Point::new("a", 13.7563, 100.5018).unwrap(),
///     Point::new("b", 14.9750, 102.0984).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 1), haversine_km(13.7563, 100.5018, 14.9750, 102.0984));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix for the given points.
    ///
    /// Points are assumed valid; the ordering engine checks them first.
    pub fn from_points(points: &[Point]) -> Self {
        // Each direction is evaluated on its own (no mirroring) so sums over
        // the matrix are bit-identical to `path_distance` over the points.
        let data = points
            .iter()
            .flat_map(|from| points.iter().map(move |to| haversine_between(from, to)))
            .collect();
        Self {
            data,
            size: points.len(),
        }
    }

    /// Distance in km from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of points covered.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new("bkk", 13.7563, 100.5018).expect("valid"),
            Point::new("siam", 13.7466, 100.5348).expect("valid"),
            Point::new("cnx", 18.7880, 98.9870).expect("valid"),
        ]
    }

    #[test]
    fn test_from_points() {
        let pts = sample_points();
        let dm = DistanceMatrix::from_points(&pts);
        assert_eq!(dm.size(), 3);
        for i in 0..3 {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(dm.get(i, j), haversine_between(&pts[i], &pts[j]));
            }
        }
    }

    #[test]
    fn test_directions_agree() {
        let dm = DistanceMatrix::from_points(&sample_points());
        for i in 0..3 {
            for j in 0..3 {
                assert!((dm.get(i, j) - dm.get(j, i)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        assert_eq!(dm.size(), 0);
    }
}
