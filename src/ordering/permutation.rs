//! Exhaustive permutation generation (Heap's algorithm).
//!
//! # Algorithm
//!
//! Iterative Heap's algorithm: each step swaps exactly one pair, so every
//! permutation of `k` items is produced exactly once in `k!` steps with O(k)
//! extra memory. The enumeration order depends only on the input order,
//! which keeps tie-breaking in the search reproducible.
//!
//! # Reference
//!
//! Heap, B.R. (1963). "Permutations by interchanges",
//! *The Computer Journal* 6(3), 293-298.

/// Lazy, finite generator over all permutations of a set of indices.
///
/// This is a lending generator: each permutation borrows the internal
/// buffer, so no allocation happens per step.
///
/// # Examples
///
/// ```
/// use u_itinerary::ordering::Permutations;
///
/// let mut perms = Permutations::new(vec![1, 2, 3]);
/// let mut seen = Vec::new();
/// while let Some(p) = perms.next_permutation() {
///     seen.push(p.to_vec());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    items: Vec<usize>,
    counters: Vec<usize>,
    cursor: usize,
    started: bool,
}

impl Permutations {
    /// Starts a generator whose first permutation is `items` itself.
    ///
    /// An empty input yields exactly one (empty) permutation.
    pub fn new(items: Vec<usize>) -> Self {
        let k = items.len();
        Self {
            items,
            counters: vec![0; k],
            cursor: 1,
            started: false,
        }
    }

    /// Advances to the next permutation, or returns `None` when exhausted.
    pub fn next_permutation(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }
        while self.cursor < self.items.len() {
            let i = self.cursor;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.cursor = 1;
                return Some(&self.items);
            }
            self.counters[i] = 0;
            self.cursor += 1;
        }
        None
    }
}

/// `k!`, or `None` if it overflows `usize`.
pub fn permutation_count(k: usize) -> Option<usize> {
    (1..=k).try_fold(1usize, |acc, x| acc.checked_mul(x))
}
