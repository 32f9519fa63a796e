//! Dense columns of equal-width bit vectors.
//!
//! A [`BitVectorColumn`] is the candidate set a ranking scan runs over: a
//! 0-indexed, append-only sequence of [`BitVector`]s that all share one
//! configured width. The width invariant is enforced at the single mutation
//! point ([`BitVectorColumn::push`]), so query code may assume every entry
//! matches `column.width()` without re-checking per element.
//!
//! Mutation takes `&mut self` and queries take `&self`, so the borrow checker
//! rules out appends racing a scan. A shared `&BitVectorColumn` can be read
//! from any number of threads concurrently; serializing writers against
//! readers (lock, snapshot, copy-on-write) is the owner's job, not this
//! type's.

use crate::bitvec::BitVector;
use crate::error::{RankError, Result};

/// An ordered, homogeneous collection of bit vectors.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitVectorColumn {
    entries: Vec<BitVector>,
    width: usize,
}

impl BitVectorColumn {
    /// Create an empty column whose entries must all have `width` bits.
    pub fn new(width: usize) -> Self {
        Self {
            entries: Vec::new(),
            width,
        }
    }

    /// Shared bit width of all entries.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry.
    ///
    /// Returns `DimensionMismatch` if the entry's width differs from the
    /// column's configured width.
    pub fn push(&mut self, entry: BitVector) -> Result<()> {
        if entry.width() != self.width {
            return Err(RankError::DimensionMismatch {
                query_bits: entry.width(),
                column_bits: self.width,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Entry at `position`, or `IndexOutOfRange`.
    pub fn get(&self, position: usize) -> Result<&BitVector> {
        self.entries
            .get(position)
            .ok_or(RankError::IndexOutOfRange {
                position,
                size: self.entries.len(),
            })
    }

    /// Entry at `position` without a bounds check against external input.
    ///
    /// Precondition: `position < self.size()`. Used by scan loops driven by a
    /// bounded counter; panics in debug builds if the precondition fails.
    #[inline]
    pub fn get_unchecked(&self, position: usize) -> &BitVector {
        debug_assert!(position < self.entries.len());
        &self.entries[position]
    }

    /// Iterate over entries in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, BitVector> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a BitVectorColumn {
    type Item = &'a BitVector;
    type IntoIter = std::slice::Iter<'a, BitVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
