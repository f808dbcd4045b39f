// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! The transform driver: apply a cipher map to a byte buffer.
//!
//! The driver walks the map position by position, applies the named bit
//! operation to the byte at the same position, and writes the result into a
//! freshly allocated output buffer. The input is never mutated — the caller
//! keeps the original, which matters because the same map is later
//! reapplied to the transformed buffer to reverse it.
//!
//! Error policy is fail-fast: the first bit-operation error aborts the whole
//! transform and propagates untouched. A partially transformed buffer is not
//! a safe input to the reversing pass, so there is no partial-success mode.

use crate::bitops;
use crate::error::ScrambleError;
use crate::map::{CipherMap, ScrambleOp};

/// Apply `op` to a single byte at `index`.
///
/// `Invert` and `SwapRight` keep their recast guard here: the driver trusts
/// the map it was given, and a caller-supplied map that touches the MSB is
/// surfaced as [`ScrambleError::RecastWarning`] rather than silently
/// recast. Generated maps never reach the guarded indices.
fn apply_op(value: u8, op: ScrambleOp, index: i8) -> Result<u8, ScrambleError> {
    match op {
        ScrambleOp::Invert => bitops::invert_bit(value, index, false),
        ScrambleOp::SwapLeft => bitops::swap_left(value, index),
        ScrambleOp::SwapRight => bitops::swap_right(value, index, false),
        ScrambleOp::InverseLeft => bitops::inverse_left(value, index),
        ScrambleOp::InverseRight => bitops::inverse_right(value, index),
        ScrambleOp::InverseAll => Ok(bitops::inverse_all(value)),
        ScrambleOp::Shredded => Ok(bitops::shred(value)),
    }
}

/// Transform `buffer` under `map`, returning a new buffer.
///
/// Applying the same map twice restores the original:
/// `transform(&transform(b, m)?, m)? == b` for every map whose indices are
/// within each operation's valid domain.
///
/// A map shorter than the buffer transforms only the covered prefix; bytes
/// beyond the map's length pass through unchanged. This mirrors the historic
/// behavior and is deliberate, not an error.
///
/// # Errors
/// - [`ScrambleError::NullOrInvalid`] if the map is longer than the buffer.
/// - Any bit-operation error for a position, propagated unchanged.
pub fn transform(buffer: &[u8], map: &CipherMap) -> Result<Vec<u8>, ScrambleError> {
    if map.len() > buffer.len() {
        return Err(ScrambleError::NullOrInvalid);
    }
    let mut out = Vec::with_capacity(buffer.len());
    for i in 0..map.len() {
        out.push(apply_op(buffer[i], map.op_at(i), map.index_at(i))?);
    }
    out.extend_from_slice(&buffer[map.len()..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::CipherMap;

    #[test]
    fn invert_and_swap_example() {
        // [3, 54] = bit patterns 11, 110110.
        // Invert bit 0 of 3 -> 10 (2); swap bits 2/3 of 54 -> 111010 (58).
        let map = CipherMap::new(
            vec![ScrambleOp::Invert, ScrambleOp::SwapLeft],
            vec![0, 2],
        )
        .unwrap();
        let scrambled = transform(&[3, 54], &map).unwrap();
        assert_eq!(scrambled, vec![2, 58]);

        let restored = transform(&scrambled, &map).unwrap();
        assert_eq!(restored, vec![3, 54]);
    }

    #[test]
    fn empty_buffer_empty_map() {
        let map = CipherMap::new(vec![], vec![]).unwrap();
        assert_eq!(transform(&[], &map).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn short_map_leaves_tail_untouched() {
        let map = CipherMap::new(vec![ScrambleOp::InverseAll], vec![0]).unwrap();
        let out = transform(&[0x0F, 0xAA, 0xBB], &map).unwrap();
        assert_eq!(out, vec![0xF0, 0xAA, 0xBB]);
    }

    #[test]
    fn map_longer_than_buffer_rejected() {
        let map = CipherMap::new(
            vec![ScrambleOp::Invert, ScrambleOp::Invert],
            vec![0, 0],
        )
        .unwrap();
        assert_eq!(
            transform(&[1], &map).unwrap_err(),
            ScrambleError::NullOrInvalid
        );
    }

    #[test]
    fn input_not_mutated() {
        let buffer = vec![0xDE, 0xAD];
        let map = CipherMap::new(
            vec![ScrambleOp::Shredded, ScrambleOp::InverseAll],
            vec![0, 0],
        )
        .unwrap();
        let out = transform(&buffer, &map).unwrap();
        assert_eq!(buffer, vec![0xDE, 0xAD]);
        assert_ne!(out, buffer);
    }

    #[test]
    fn fail_fast_propagates_bitop_error() {
        // Second position swaps right at index 0: no neighbor.
        let map = CipherMap::new(
            vec![ScrambleOp::Invert, ScrambleOp::SwapRight],
            vec![0, 0],
        )
        .unwrap();
        assert_eq!(
            transform(&[1, 2], &map).unwrap_err(),
            ScrambleError::SwapAtEnd
        );
    }

    #[test]
    fn recast_guard_surfaces_through_driver() {
        let map = CipherMap::new(vec![ScrambleOp::Invert], vec![7]).unwrap();
        assert_eq!(
            transform(&[0x80], &map).unwrap_err(),
            ScrambleError::RecastWarning
        );
    }

    #[test]
    fn roundtrip_every_op() {
        // One byte per variant, all at a boundary-safe index.
        let ops = ScrambleOp::ALL.to_vec();
        let indices = vec![2i8; ops.len()];
        let map = CipherMap::new(ops, indices).unwrap();
        let buffer: Vec<u8> = vec![0x00, 0x01, 0x55, 0xAA, 0xF0, 0x0F, 0xFF];

        let scrambled = transform(&buffer, &map).unwrap();
        let restored = transform(&scrambled, &map).unwrap();
        assert_eq!(restored, buffer);
    }
}
