//! Geodesic distance.
//!
//! Provides the Haversine great-circle kernel and a dense distance matrix
//! built from it.

mod haversine;
mod matrix;

pub(crate) use haversine::haversine_between;
pub use haversine::{compute_distance_km, haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
