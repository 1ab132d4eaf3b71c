//! Error types returned by the distance function and the ordering engine.

use std::fmt;

use thiserror::Error as ThisError;

/// Which anchor a fixed identifier was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRole {
    /// The fixed first stop.
    Start,
    /// The fixed last stop.
    End,
}

impl fmt::Display for AnchorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorRole::Start => f.write_str("start"),
            AnchorRole::End => f.write_str("end"),
        }
    }
}

/// Failures raised synchronously by the crate's entry points.
///
/// None of these are transient: they describe bad input, so callers should
/// translate them into user-facing messages rather than retry.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum RoutingError {
    /// A point has a non-finite or out-of-range coordinate.
    #[error("invalid point {id:?}: {reason}")]
    InvalidInput { id: String, reason: String },
    /// A fixed start/end identifier matches no supplied point.
    #[error("fixed {role} {id:?} does not match any supplied point")]
    InvalidReference { role: AnchorRole, id: String },
    /// Fewer points than the requested variant needs.
    #[error("need at least {required} points (a start and an end), got {actual}")]
    InsufficientPoints { required: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, RoutingError>;

impl RoutingError {
    pub fn invalid_input(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_reference(role: AnchorRole, id: impl Into<String>) -> Self {
        Self::InvalidReference {
            role,
            id: id.into(),
        }
    }

    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Stable machine-readable kind, used by the FFI and wasm surfaces.
    pub fn kind(&self) -> &'static str {
        match self {
            RoutingError::InvalidInput { .. } => "InvalidInput",
            RoutingError::InvalidReference { .. } => "InvalidReference",
            RoutingError::InsufficientPoints { .. } => "InsufficientPoints",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = RoutingError::invalid_reference(AnchorRole::End, "hotel");
        assert_eq!(
            e.to_string(),
            "fixed end \"hotel\" does not match any supplied point"
        );

        let e = RoutingError::insufficient_points(2, 1);
        assert_eq!(
            e.to_string(),
            "need at least 2 points (a start and an end), got 1"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            RoutingError::invalid_input("a", "latitude is NaN").kind(),
            "InvalidInput"
        );
        assert_eq!(
            RoutingError::invalid_reference(AnchorRole::Start, "x").kind(),
            "InvalidReference"
        );
        assert_eq!(
            RoutingError::insufficient_points(2, 0).kind(),
            "InsufficientPoints"
        );
    }
}
