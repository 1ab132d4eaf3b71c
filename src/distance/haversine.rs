//! Great-circle distance on a spherical Earth.
//!
//! # Algorithm
//!
//! ```text
//! a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! c = 2·atan2(√a, √(1−a))
//! d = R·c
//! ```
//!
//! with all angles in radians and `R` = 6371 km. Totals derived from this are
//! user-visible, so the operation order here must stay fixed.

use crate::error::Result;
use crate::models::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in km between two `(lat, lon)` pairs given in degrees.
///
/// Inputs are not validated; NaN or out-of-range coordinates give an
/// unspecified result. Use [`compute_distance_km`] for checked input.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    // Rounding can push `a` past 1 for near-antipodal pairs.
    let a = (half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon).min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Unchecked distance between two points; callers have validated them.
pub(crate) fn haversine_between(a: &Point, b: &Point) -> f64 {
    haversine_km(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

/// Great-circle distance in km between two validated points.
///
/// Returns exactly `0.0` for identical coordinates.
///
/// # Errors
///
/// [`RoutingError::InvalidInput`](crate::RoutingError::InvalidInput) if either
/// point has a non-finite or out-of-range coordinate.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Point;
/// use u_itinerary::distance::compute_distance_km;
///
/// let bangkok = Point::new("bkk", 13.7563, 100.5018).unwrap();
/// let siam = Point::new("siam", 13.7466, 100.5348).unwrap();
/// let d = compute_distance_km(&bangkok, &siam).unwrap();
/// assert!((d - 3.724).abs() < 0.01);
/// ```
pub fn compute_distance_km(a: &Point, b: &Point) -> Result<f64> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_between(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoutingError;
    use proptest::prelude::*;

    fn pt(lat: f64, lon: f64) -> Point {
        Point::new("p", lat, lon).expect("valid")
    }

    #[test]
    fn test_bangkok_siam() {
        let d = haversine_km(13.7563, 100.5018, 13.7466, 100.5348);
        assert!((d - 3.7239).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn test_identity_is_exact_zero() {
        assert_eq!(haversine_km(13.7563, 100.5018, 13.7563, 100.5018), 0.0);
        assert_eq!(haversine_km(-90.0, 0.0, -90.0, 0.0), 0.0);
    }

    #[test]
    fn test_one_degree_on_equator() {
        // Arc length of 1° on a 6371 km sphere.
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_near_antipodal_is_finite() {
        let (lat, lon) = (-70.2758, -42.2306);
        let d = haversine_km(lat, lon, -lat, lon + 180.0);
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-2);
    }

    #[test]
    fn test_dateline_wrap() {
        // 179.5E to 179.5W is one degree apart, not 359.
        let d = haversine_km(0.0, 179.5, 0.0, -179.5);
        assert!((d - haversine_km(0.0, 0.0, 0.0, 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_compute_distance_rejects_invalid() {
        let good = pt(0.0, 0.0);
        let bad: Point =
            serde_json::from_str(r#"{"id":"bad","latitude":0.0,"longitude":181.0}"#).expect("json");
        assert!(matches!(
            compute_distance_km(&good, &bad),
            Err(RoutingError::InvalidInput { .. })
        ));
        assert!(matches!(
            compute_distance_km(&bad, &good),
            Err(RoutingError::InvalidInput { .. })
        ));
    }

    fn coord() -> impl Strategy<Value = (f64, f64)> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
    }

    proptest! {
        #[test]
        fn prop_symmetric((la, lo) in coord(), (lb, lob) in coord()) {
            let a = pt(la, lo);
            let b = pt(lb, lob);
            let ab = compute_distance_km(&a, &b).expect("valid");
            let ba = compute_distance_km(&b, &a).expect("valid");
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn prop_identity((la, lo) in coord()) {
            let a = pt(la, lo);
            prop_assert_eq!(compute_distance_km(&a, &a).expect("valid"), 0.0);
        }

        #[test]
        fn prop_non_negative_and_bounded((la, lo) in coord(), (lb, lob) in coord()) {
            let d = haversine_km(la, lo, lb, lob);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }

        #[test]
        fn prop_antipode_is_half_circumference(lat in -90.0f64..=90.0, lon in -180.0f64..=0.0) {
            let d = haversine_km(lat, lon, -lat, lon + 180.0);
            prop_assert!(d.is_finite());
            prop_assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-2);
        }

        #[test]
        fn prop_triangle_inequality(
            (la, lo) in coord(),
            (lb, lob) in coord(),
            (lc, loc) in coord(),
        ) {
            let ac = haversine_km(la, lo, lc, loc);
            let ab = haversine_km(la, lo, lb, lob);
            let bc = haversine_km(lb, lob, lc, loc);
            prop_assert!(ac <= ab + bc + 1e-6);
        }
    }
}
