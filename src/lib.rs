//! # u-itinerary
//!
//! Stop ordering for day-trip itineraries: finds the shortest visiting order
//! over a handful of geographic points, optionally with a fixed start and/or
//! end, before the order is handed to a driving-directions provider.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, SolveOptions, SolveRequest)
//! - [`distance`] — Haversine great-circle distance and distance matrix
//! - [`evaluation`] — Path and closed-tour length accumulation
//! - [`ordering`] — Brute-force ordering engine and permutation generator
//! - [`error`] — Error kinds returned by the entry points
//!
//! ## Example
//!
//! ```
//! use u_itinerary::models::{Point, SolveOptions};
//! use u_itinerary::solve_ordering;
//!
//! let points = vec![
//!     Point::new("bangkok", 13.7563, 100.5018).unwrap(),
//!     Point::new("korat", 14.9750, 102.0984).unwrap(),
//!     Point::new("chiang-mai", 18.7880, 98.9870).unwrap(),
//!     Point::new("phuket", 7.8804, 98.3923).unwrap(),
//! ];
//! let tour = solve_ordering(&points, &SolveOptions::default()).unwrap();
//! assert_eq!(tour.len(), 4);
//! assert_eq!(tour.order()[0].id(), "bangkok");
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod ordering;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use distance::compute_distance_km;
pub use error::{Result, RoutingError};
pub use ordering::{solve, solve_ordering};
