//! Exact Hamming top-K ranking over a bit-vector column.
//!
//! This is the innermost loop of the similarity-search path: one linear scan
//! over the column, one unchecked XOR+popcount distance per entry, and a
//! [`BoundedTopK`] selector so only `k` candidates are ever kept. Total cost
//! is O(n · width/64 + n · log k) for a column of n entries.
//!
//! The width precondition is validated exactly once per call; the scan body
//! then uses the unchecked distance and accessor paths. Results are exact
//! (this is a brute-force scan, not an approximation) — the "approximate"
//! part of the surrounding ANN pipeline lives in how the bit vectors were
//! encoded, which is not this module's concern.

use crate::bitvec::BitVector;
use crate::column::BitVectorColumn;
use crate::error::{RankError, Result};
use crate::topk::{BoundedTopK, Candidate};

/// One ranked match: a column position and its normalized distance.
///
/// `score = hamming_distance / width`, so `score` is in `[0, 1]` and is `0.0`
/// exactly when the entry is bit-identical to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub position: usize,
    pub score: f32,
}

/// Rank the `k` nearest column entries to `query` by Hamming distance.
///
/// Returns at most `min(k, column.size())` neighbors, ascending by score with
/// position as tie-break. `k == 0` and an empty column both yield an empty
/// result. Fails with `DimensionMismatch` if the query width differs from the
/// column width, and with `InvalidParameter` for a zero-width query (the
/// score normalization would otherwise divide by zero).
///
/// The inputs are borrowed read-only for the duration of the call and not
/// retained; concurrent `rank_hamming` calls over one shared column are fine.
///
/// ```
/// use binrank::{rank_hamming, BitVector, BitVectorColumn};
///
/// let mut column = BitVectorColumn::new(8);
/// column.push(BitVector::from_bits(&[true; 8])).unwrap();
/// column.push(BitVector::zeros(8)).unwrap();
///
/// let query = BitVector::zeros(8);
/// let hits = rank_hamming(&query, &column, 1).unwrap();
/// assert_eq!(hits[0].position, 1);
/// assert_eq!(hits[0].score, 0.0);
/// ```
pub fn rank_hamming(
    query: &BitVector,
    column: &BitVectorColumn,
    k: usize,
) -> Result<Vec<Neighbor>> {
    if query.width() != column.width() {
        return Err(RankError::DimensionMismatch {
            query_bits: query.width(),
            column_bits: column.width(),
        });
    }
    if query.width() == 0 {
        return Err(RankError::InvalidParameter(
            "zero-width query cannot be ranked".to_string(),
        ));
    }

    // Width equality is established; the loop below may use the unchecked
    // distance and accessor paths. The retained count can never exceed the
    // stream length, so the selector is sized by min(k, size).
    let mut topk = BoundedTopK::new(k.min(column.size()));
    for position in 0..column.size() {
        let distance = query.hamming_distance_unchecked(column.get_unchecked(position));
        topk.push(Candidate { distance, position });
    }

    let denom = query.width() as f32;
    Ok(topk
        .into_sorted_vec()
        .into_iter()
        .map(|c| Neighbor {
            position: c.position,
            score: c.distance as f32 / denom,
        })
        .collect())
}
