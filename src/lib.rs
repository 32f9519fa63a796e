//! binrank: exact Hamming-distance top-K ranking over packed bit vectors.
//!
//! This crate is the innermost loop of a similarity-search pipeline: given a
//! query fingerprint and a large column of candidate fingerprints of the same
//! bit width, find the K candidates with smallest Hamming distance, sorted
//! ascending, with each distance normalized to a `[0, 1]` score.
//!
//! - [`bitvec`]: fixed-width packed bit patterns, XOR+popcount distance
//! - [`column`]: dense, homogeneous, positionally indexed candidate sets
//! - [`topk`]: bounded selection keeping the best K of a stream in O(log K)
//! - [`rank`]: the scan itself, [`rank_hamming`]
//!
//! # Why Hamming distance
//!
//! Binary fingerprints are a compact proxy for similarity: encodings in the
//! SimHash family (Charikar 2002) map angular similarity of dense feature
//! vectors onto Hamming distance of short bit strings, after which a
//! candidate comparison is a handful of XOR + popcount instructions instead
//! of a floating-point loop. Producing those fingerprints (random projection,
//! LSH) is the encoder's job; this crate only ranks them.
//!
//! # Why a bounded selector
//!
//! Serving queries wants the top K of a column of n entries with K ≪ n.
//! Sorting all n candidates is O(n log n); streaming them through a
//! capacity-K max-heap is O(n log K) and keeps memory at O(K). For the
//! typical K of 10–100 against columns of millions, that difference is the
//! whole game.
//!
//! # Example
//!
//! ```
//! use binrank::{rank_hamming, BitVector, BitVectorColumn};
//!
//! let width = 64;
//! let mut column = BitVectorColumn::new(width);
//! for seed in 0..100u64 {
//!     let word = seed.wrapping_mul(0x9e3779b97f4a7c15);
//!     column.push(BitVector::from_words(&[word], width)?)?;
//! }
//!
//! let query = column.get(42)?.clone();
//! let hits = rank_hamming(&query, &column, 5)?;
//!
//! assert_eq!(hits.len(), 5);
//! assert_eq!(hits[0].position, 42); // exact match ranks first
//! assert_eq!(hits[0].score, 0.0);
//! # Ok::<(), binrank::RankError>(())
//! ```
//!
//! # Concurrency
//!
//! [`rank_hamming`] is a pure function over borrowed inputs: no I/O, no
//! blocking, no retained references. Any number of calls may run in parallel
//! over one shared `&BitVectorColumn`; appending to a column requires `&mut`
//! and is therefore serialized against scans by the borrow checker.

pub mod bitvec;
pub mod column;
pub mod error;
pub mod rank;
pub mod topk;

pub use bitvec::BitVector;
pub use column::BitVectorColumn;
pub use error::{RankError, Result};
pub use rank::{rank_hamming, Neighbor};
pub use topk::{BoundedTopK, Candidate};
