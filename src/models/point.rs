//! Geographic point type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A named geographic location (latitude/longitude in degrees).
///
/// Points are created by the caller from upstream data (saved places, hotel,
/// airport, ...). The ordering engine borrows them and returns clones in the
/// new visiting order; it never changes a point's identity.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Point;
///
/// let p = Point::new("grand-palace", 13.7500, 100.4913)
///     .unwrap()
///     .with_label("Grand Palace");
/// assert_eq!(p.id(), "grand-palace");
/// assert_eq!(p.label(), Some("Grand Palace"));
///
/// assert!(Point::new("bad", 91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    id: String,
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Point {
    /// Creates a validated point.
    ///
    /// Fails with [`RoutingError::InvalidInput`] if either coordinate is
    /// non-finite or outside its range. Values are never clamped.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        let point = Self {
            id: id.into(),
            latitude,
            longitude,
            label: None,
        };
        point.validate()?;
        Ok(point)
    }

    /// Attaches a display name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Opaque identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Display name, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Checks the coordinate invariants.
    ///
    /// Deserialized points bypass [`Point::new`], so every entry point calls
    /// this again before computing distances.
    pub fn validate(&self) -> Result<()> {
        check_coordinate(&self.id, "latitude", self.latitude, 90.0)?;
        check_coordinate(&self.id, "longitude", self.longitude, 180.0)
    }
}

fn check_coordinate(id: &str, name: &str, value: f64, limit: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RoutingError::invalid_input(
            id,
            format!("{name} is not finite ({value})"),
        ));
    }
    if !(-limit..=limit).contains(&value) {
        return Err(RoutingError::invalid_input(
            id,
            format!("{name} {value} is outside -{limit}..={limit}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new("a", 13.7563, 100.5018).expect("valid");
        assert_eq!(p.id(), "a");
        assert_eq!(p.latitude(), 13.7563);
        assert_eq!(p.longitude(), 100.5018);
        assert!(p.label().is_none());
    }

    #[test]
    fn test_point_bounds_inclusive() {
        assert!(Point::new("n", 90.0, 180.0).is_ok());
        assert!(Point::new("s", -90.0, -180.0).is_ok());
    }

    #[test]
    fn test_point_out_of_range() {
        assert!(matches!(
            Point::new("a", 90.5, 0.0),
            Err(RoutingError::InvalidInput { .. })
        ));
        assert!(matches!(
            Point::new("a", 0.0, -180.1),
            Err(RoutingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_point_non_finite() {
        assert!(Point::new("a", f64::NAN, 0.0).is_err());
        assert!(Point::new("a", 0.0, f64::INFINITY).is_err());
        assert!(Point::new("a", f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_point_error_names_point() {
        let err = Point::new("museum", 0.0, 200.0).expect_err("out of range");
        match err {
            RoutingError::InvalidInput { id, reason } => {
                assert_eq!(id, "museum");
                assert!(reason.contains("longitude"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_point_deserialize_aliases() {
        let p: Point =
            serde_json::from_str(r#"{"id":"x","lat":1.5,"lng":2.5,"label":"X"}"#).expect("json");
        assert_eq!(p.latitude(), 1.5);
        assert_eq!(p.longitude(), 2.5);
        assert_eq!(p.label(), Some("X"));
    }

    #[test]
    fn test_point_deserialized_invalid_is_caught() {
        let p: Point =
            serde_json::from_str(r#"{"id":"x","latitude":120.0,"longitude":0.0}"#).expect("json");
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_point_serialize_skips_missing_label() {
        let p = Point::new("x", 1.0, 2.0).expect("valid");
        let json = serde_json::to_string(&p).expect("json");
        assert_eq!(json, r#"{"id":"x","latitude":1.0,"longitude":2.0}"#);
    }
}
