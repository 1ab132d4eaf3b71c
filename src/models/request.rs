//! Solve options and request types.

use serde::{Deserialize, Serialize};

use super::Point;

/// Anchor constraints for one ordering call.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::SolveOptions;
///
/// let opts = SolveOptions::default()
///     .with_fixed_start("hotel")
///     .with_fixed_end("airport");
/// assert_eq!(opts.fixed_start_id.as_deref(), Some("hotel"));
/// assert_eq!(opts.fixed_end_id.as_deref(), Some("airport"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOptions {
    /// Identifier of the point that must be visited first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_start_id: Option<String>,
    /// Identifier of the point that must be visited last. May equal the
    /// start; that point is then visited once, first, on an open path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_end_id: Option<String>,
}

impl SolveOptions {
    /// Pins the first stop.
    pub fn with_fixed_start(mut self, id: impl Into<String>) -> Self {
        self.fixed_start_id = Some(id.into());
        self
    }

    /// Pins the last stop.
    pub fn with_fixed_end(mut self, id: impl Into<String>) -> Self {
        self.fixed_end_id = Some(id.into());
        self
    }
}

/// Points plus options, as received from the API layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub options: SolveOptions,
}

impl SolveRequest {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            options: SolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_is_free() {
        let opts = SolveOptions::default();
        assert!(opts.fixed_start_id.is_none());
        assert!(opts.fixed_end_id.is_none());
    }

    #[test]
    fn test_request_from_json() {
        let req: SolveRequest = serde_json::from_str(
            r#"{
                "points": [
                    {"id": "h", "lat": 13.75, "lng": 100.50},
                    {"id": "m", "lat": 13.74, "lng": 100.53}
                ],
                "fixedStartId": "h"
            }"#,
        )
        .expect("json");
        assert_eq!(req.points.len(), 2);
        assert_eq!(req.options.fixed_start_id.as_deref(), Some("h"));
        assert!(req.options.fixed_end_id.is_none());
    }

    #[test]
    fn test_request_without_options() {
        let req: SolveRequest = serde_json::from_str(r#"{"points": []}"#).expect("json");
        assert!(req.points.is_empty());
        assert_eq!(req.options, SolveOptions::default());
    }
}
