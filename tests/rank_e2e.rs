//! End-to-end tests for binrank against randomized columns.
//!
//! Larger scale than the unit tests: seeded random fingerprints, a
//! brute-force oracle, and concurrent scans over a shared column.

use rand::prelude::*;

use binrank::{rank_hamming, BitVector, BitVectorColumn};

fn random_vector(rng: &mut StdRng, width: usize) -> BitVector {
    let bits: Vec<bool> = (0..width).map(|_| rng.gen()).collect();
    BitVector::from_bits(&bits)
}

fn random_column(rng: &mut StdRng, width: usize, size: usize) -> BitVectorColumn {
    let mut col = BitVectorColumn::new(width);
    for _ in 0..size {
        col.push(random_vector(rng, width)).unwrap();
    }
    col
}

fn brute_force(query: &BitVector, column: &BitVectorColumn, k: usize) -> Vec<(usize, u32)> {
    let mut all: Vec<(usize, u32)> = column
        .iter()
        .enumerate()
        .map(|(pos, v)| (pos, query.hamming_distance(v).unwrap()))
        .collect();
    all.sort_by_key(|&(pos, dist)| (dist, pos));
    all.truncate(k);
    all
}

#[test]
fn matches_brute_force_on_large_random_column() {
    let mut rng = StdRng::seed_from_u64(42);
    let width = 128;
    let column = random_column(&mut rng, width, 500);

    for k in [1, 10, 100, 500] {
        let query = random_vector(&mut rng, width);
        let hits = rank_hamming(&query, &column, k).unwrap();
        let expected = brute_force(&query, &column, k);

        assert_eq!(hits.len(), expected.len());
        for (hit, (pos, dist)) in hits.iter().zip(expected.iter()) {
            assert_eq!(hit.position, *pos, "k={k}");
            assert_eq!(hit.score, *dist as f32 / width as f32, "k={k}");
        }
    }
}

#[test]
fn finds_planted_near_duplicates() {
    let mut rng = StdRng::seed_from_u64(7);
    let width = 64;
    let query = random_vector(&mut rng, width);

    // Plant the query and two near-duplicates among random noise.
    let mut column = random_column(&mut rng, width, 200);
    column.push(query.clone()).unwrap(); // position 200, distance 0
    let mut near = query.clone();
    near.set(0, !near.get(0).unwrap()).unwrap();
    column.push(near).unwrap(); // position 201, distance 1
    let mut nearish = query.clone();
    for i in 0..3 {
        nearish.set(i, !nearish.get(i).unwrap()).unwrap();
    }
    column.push(nearish).unwrap(); // position 202, distance 3

    // Random 64-bit vectors sit around distance 32; the planted ones win.
    let hits = rank_hamming(&query, &column, 3).unwrap();
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![200, 201, 202]);
    assert_eq!(hits[0].score, 0.0);
    assert_eq!(hits[1].score, 1.0 / 64.0);
    assert_eq!(hits[2].score, 3.0 / 64.0);
}

#[test]
fn ranking_does_not_mutate_inputs() {
    let mut rng = StdRng::seed_from_u64(99);
    let width = 32;
    let column = random_column(&mut rng, width, 50);
    let query = random_vector(&mut rng, width);

    let before: Vec<BitVector> = column.iter().cloned().collect();
    let query_before = query.clone();

    let first = rank_hamming(&query, &column, 10).unwrap();
    let second = rank_hamming(&query, &column, 10).unwrap();

    assert_eq!(first, second);
    assert_eq!(query, query_before);
    assert!(column.iter().zip(before.iter()).all(|(a, b)| a == b));
}

#[test]
fn concurrent_scans_over_shared_column() {
    let mut rng = StdRng::seed_from_u64(1234);
    let width = 64;
    let column = random_column(&mut rng, width, 300);
    let queries: Vec<BitVector> = (0..8).map(|_| random_vector(&mut rng, width)).collect();

    let expected: Vec<_> = queries
        .iter()
        .map(|q| rank_hamming(q, &column, 20).unwrap())
        .collect();

    let column = &column;
    std::thread::scope(|s| {
        let handles: Vec<_> = queries
            .iter()
            .map(|q| s.spawn(move || rank_hamming(q, column, 20).unwrap()))
            .collect();
        for (handle, expected) in handles.into_iter().zip(expected.iter()) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
