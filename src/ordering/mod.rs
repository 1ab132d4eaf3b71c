//! Exact route ordering for small stop sets.
//!
//! - [`solve_ordering`] — Brute-force shortest visiting order with optional
//!   fixed start/end, O(k!) in the number of free stops
//! - [`Permutations`] — Lazy Heap's-algorithm permutation generator

mod engine;
mod permutation;

pub use engine::{solve, solve_ordering};
pub use permutation::{permutation_count, Permutations};
