//! Domain model types for itinerary ordering.
//!
//! Provides the core abstractions: geographic points, the ordered tour the
//! solver returns, and the options/request shapes accepted from callers.

mod point;
mod request;
mod tour;

pub use point::Point;
pub use request::{SolveOptions, SolveRequest};
pub use tour::{DirectionsQuery, Tour, TourKind};
