//! Bounded top-K selection over a candidate stream.
//!
//! [`BoundedTopK`] retains the `min(K, pushed)` smallest candidates seen so
//! far, at O(log K) per push, without materializing the full stream. Backed
//! by a max-heap whose root is the current worst retained candidate: a push
//! at capacity either replaces the root or is discarded, so selecting the
//! best K out of n costs O(n log K) instead of the O(n log n) full sort.
//!
//! Ordering is on `(distance, position)`, so equal-distance candidates are
//! retained and drained deterministically: among candidates at the eviction
//! threshold, the largest position goes first.

use std::collections::BinaryHeap;

/// A `(distance, position)` pair produced during a column scan.
///
/// Ordering is lexicographic on `(distance, position)`; smaller is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub distance: u32,
    pub position: usize,
}

/// A size-capped container holding the best `K` candidates seen so far.
#[derive(Debug, Clone)]
pub struct BoundedTopK {
    // Max-heap: the root is the worst retained candidate.
    heap: BinaryHeap<Candidate>,
    capacity: usize,
}

impl BoundedTopK {
    /// Create a selector retaining at most `capacity` candidates.
    ///
    /// `capacity == 0` is valid: pushes are accepted and dropped, and the
    /// structure stays empty. `capacity` may be arbitrarily large; memory is
    /// only consumed for candidates actually retained.
    pub fn new(capacity: usize) -> Self {
        // Pre-allocation is a hint, not a commitment: the stream may be far
        // shorter than the capacity, so a huge K must not allocate K slots
        // up front. The heap grows past the hint as needed.
        const PREALLOC_LIMIT: usize = 1024;
        Self {
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    /// Offer a candidate.
    ///
    /// Below capacity the candidate is always retained. At capacity it
    /// replaces the current worst iff it is strictly better under
    /// `(distance, position)` order; otherwise it is dropped.
    pub fn push(&mut self, candidate: Candidate) {
        if self.heap.len() < self.capacity {
            self.heap.push(candidate);
        } else if let Some(mut worst) = self.heap.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    /// Current number of retained candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Configured capacity `K`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The worst retained candidate, i.e. the next to be evicted.
    pub fn worst(&self) -> Option<&Candidate> {
        self.heap.peek()
    }

    /// Consume the selector, yielding retained candidates in ascending
    /// `(distance, position)` order.
    pub fn into_sorted_vec(self) -> Vec<Candidate> {
        self.heap.into_sorted_vec()
    }
}
