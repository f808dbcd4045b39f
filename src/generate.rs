// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! Boundary-safe random cipher map generation.
//!
//! For each byte position the generator draws an operation uniformly from
//! the full [`ScrambleOp`] set and a bit index uniformly from `[0, 6)` — the
//! fixed 8-bit frame minus two bits of headroom, so a swap always has a
//! neighbor and never reaches the recast-guarded top positions. An index
//! that lands on 0 or 1 is clamped up to 2, keeping room for a right swap.
//! The resulting map is valid for every operation at every position: a
//! subsequent transform can never fail on a generated map. Any
//! `RecastWarning` or `SwapAtEnd` seen downstream of generation is a
//! generator bug, not a user input problem.
//!
//! # Cross-platform portability
//!
//! The seeded variant draws through `u32` ranges (not `usize`) so that the
//! same seed produces the same map on 32-bit and 64-bit targets —
//! `rand::Rng::gen_range` consumes different amounts of PRNG entropy per
//! step depending on the integer width.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::map::{CipherMap, ScrambleOp, OP_COUNT};

/// Exclusive upper bound for drawn indices: 8-bit frame minus 2 headroom.
const INDEX_BOUND: u32 = 6;

/// Indices 0 and 1 are clamped up to this, leaving room for a right swap.
const MIN_INDEX: i8 = 2;

fn fill<R: Rng>(rng: &mut R, len: usize) -> CipherMap {
    let mut ops = Vec::with_capacity(len);
    let mut indices = Vec::with_capacity(len);
    for _ in 0..len {
        let op = ScrambleOp::ALL[rng.gen_range(0..OP_COUNT as u32) as usize];
        let mut index = rng.gen_range(0..INDEX_BOUND) as i8;
        if index < MIN_INDEX {
            index = MIN_INDEX;
        }
        ops.push(op);
        indices.push(index);
    }
    CipherMap::from_parts(ops, indices)
}

/// Generate a fresh random cipher map covering `len` byte positions.
///
/// Every (operation, index) pair is boundary-valid, so a transform under
/// the returned map never fails.
pub fn generate_map(len: usize) -> CipherMap {
    fill(&mut rand::thread_rng(), len)
}

/// Generate a cipher map deterministically from a 32-byte seed.
///
/// Same seed, same map, on every platform. Useful when the map must be
/// reproduced rather than stored.
pub fn generate_map_seeded(len: usize, seed: &[u8; 32]) -> CipherMap {
    let mut rng = ChaCha20Rng::from_seed(*seed);
    fill(&mut rng, len)
}
