//! Fixed-width packed bit vectors with fast Hamming distance.
//!
//! A [`BitVector`] is a compact binary fingerprint: `width` bits packed into
//! `u64` words, compared by XOR + popcount. Hamming distance over such
//! fingerprints is the workhorse metric of hash-based similarity search
//! (SimHash-style encodings map cosine similarity onto it), and the scan in
//! [`crate::rank`] spends essentially all of its time here.
//!
//! ## Checked vs. unchecked distance
//!
//! Distance only makes sense between equal-width vectors. The public
//! [`BitVector::hamming_distance`] verifies that on every call; the scan loop
//! instead validates the width once per query and then uses
//! [`BitVector::hamming_distance_unchecked`], which skips the comparison and
//! goes straight to word-wise XOR. The unchecked path is memory-safe either
//! way, but its result is meaningless if the precondition is violated, so it
//! carries a `debug_assert` to trap integration bugs early.
//!
//! ## Canonical form
//!
//! Bits above `width` in the last word are always zero. Constructors enforce
//! this, which keeps `Eq`/`Hash` structural and means the unchecked distance
//! never counts garbage tail bits.

use smallvec::SmallVec;

use crate::error::{RankError, Result};

const WORD_BITS: usize = u64::BITS as usize;

/// Packed words for fingerprints up to 256 bits without a heap allocation.
type Words = SmallVec<[u64; 4]>;

/// A fixed-width sequence of bits, packed into `u64` words.
///
/// The width is set at construction and never changes. Bit `i` lives in word
/// `i / 64` at position `i % 64`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitVector {
    words: Words,
    width: usize,
}

impl BitVector {
    /// Create an all-zero vector of the given width.
    pub fn zeros(width: usize) -> Self {
        Self {
            words: smallvec::smallvec![0; width.div_ceil(WORD_BITS)],
            width,
        }
    }

    /// Build a vector from individual bits; width is `bits.len()`.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut v = Self::zeros(bits.len());
        for (i, &b) in bits.iter().enumerate() {
            if b {
                v.words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
            }
        }
        v
    }

    /// Build a vector from pre-packed words.
    ///
    /// Fails with `InvalidParameter` if the word count does not match the
    /// width, or if any bit above `width` is set (the packed form must be
    /// canonical).
    pub fn from_words(words: &[u64], width: usize) -> Result<Self> {
        let expected = width.div_ceil(WORD_BITS);
        if words.len() != expected {
            return Err(RankError::InvalidParameter(format!(
                "expected {expected} words for width {width}, got {}",
                words.len()
            )));
        }
        if let Some(&last) = words.last() {
            if last & !tail_mask(width) != 0 {
                return Err(RankError::InvalidParameter(format!(
                    "bits set above width {width} in last word"
                )));
            }
        }
        Ok(Self {
            words: Words::from_slice(words),
            width,
        })
    }

    /// Number of bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Read the bit at `index`.
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.width {
            return Err(RankError::IndexOutOfRange {
                position: index,
                size: self.width,
            });
        }
        Ok(self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1)
    }

    /// Write the bit at `index`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        if index >= self.width {
            return Err(RankError::IndexOutOfRange {
                position: index,
                size: self.width,
            });
        }
        let mask = 1u64 << (index % WORD_BITS);
        if value {
            self.words[index / WORD_BITS] |= mask;
        } else {
            self.words[index / WORD_BITS] &= !mask;
        }
        Ok(())
    }

    /// Number of set bits.
    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Borrow the packed word storage.
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Hamming distance to `other`, verifying equal widths.
    ///
    /// Returns `DimensionMismatch` if the widths differ.
    #[inline]
    pub fn hamming_distance(&self, other: &BitVector) -> Result<u32> {
        if self.width != other.width {
            return Err(RankError::DimensionMismatch {
                query_bits: self.width,
                column_bits: other.width,
            });
        }
        Ok(self.hamming_distance_unchecked(other))
    }

    /// Hamming distance to `other` without the width check.
    ///
    /// Precondition: `other.width() == self.width()`. Intended for scan loops
    /// that validate the width once up front; the result is unspecified (but
    /// memory-safe) if the precondition is violated.
    #[inline]
    pub fn hamming_distance_unchecked(&self, other: &BitVector) -> u32 {
        debug_assert_eq!(self.width, other.width);
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

/// Mask selecting the valid bits of the last word.
#[inline]
fn tail_mask(width: usize) -> u64 {
    match width % WORD_BITS {
        0 => !0,
        r => (1u64 << r) - 1,
    }
}

impl std::fmt::Debug for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitVector({}; ", self.width)?;
        for i in 0..self.width {
            let bit = self.words[i / WORD_BITS] >> (i % WORD_BITS) & 1;
            write!(f, "{bit}")?;
        }
        write!(f, ")")
    }
}
