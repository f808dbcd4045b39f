// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! The cipher map: one scramble operation and one bit index per byte
//! position.
//!
//! A [`CipherMap`] is plain data — two parallel arrays, one entry per byte
//! the map covers. It is built once (explicitly or by the random generator),
//! mutated only during construction, and frozen from then on: the transform
//! driver reads it, never writes it. Because every operation in the map is
//! an involution, the same map both scrambles and unscrambles.
//!
//! [`ScrambleOp`] wire codes are stable (`Invert` = 0 through `Shredded` =
//! 6); the safe persistence format depends on that ordering.

use crate::error::ScrambleError;

/// Number of [`ScrambleOp`] variants.
pub const OP_COUNT: u8 = 7;

/// A bit-level scramble operation, applied to a single byte at a single
/// bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleOp {
    /// Flip the bit at the index.
    Invert,
    /// Exchange the bit at the index with the bit at index + 1.
    SwapLeft,
    /// Exchange the bit at the index with the bit at index - 1.
    SwapRight,
    /// SwapLeft, then invert both participating bits.
    InverseLeft,
    /// SwapRight, then invert both participating bits.
    InverseRight,
    /// Bitwise complement of the whole byte; the index is ignored.
    InverseAll,
    /// Flip bits 0, 2, 4 and 6; the index is ignored.
    Shredded,
}

impl ScrambleOp {
    /// All variants in wire-code order.
    pub const ALL: [ScrambleOp; OP_COUNT as usize] = [
        ScrambleOp::Invert,
        ScrambleOp::SwapLeft,
        ScrambleOp::SwapRight,
        ScrambleOp::InverseLeft,
        ScrambleOp::InverseRight,
        ScrambleOp::InverseAll,
        ScrambleOp::Shredded,
    ];

    /// Stable wire code (0..=6) used by the safe persistence format.
    pub fn code(self) -> u8 {
        match self {
            ScrambleOp::Invert => 0,
            ScrambleOp::SwapLeft => 1,
            ScrambleOp::SwapRight => 2,
            ScrambleOp::InverseLeft => 3,
            ScrambleOp::InverseRight => 4,
            ScrambleOp::InverseAll => 5,
            ScrambleOp::Shredded => 6,
        }
    }

    /// Inverse of [`code`](Self::code). Returns `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<ScrambleOp> {
        ScrambleOp::ALL.get(code as usize).copied()
    }
}

/// An ordered sequence of (operation, bit index) pairs, one per byte
/// position.
///
/// Invariant: the operation and index arrays have equal length, enforced at
/// construction. The positional accessors use slice indexing and therefore
/// panic on an out-of-range position — a hard bounds check, never silent
/// truncation. The transform driver only indexes `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherMap {
    ops: Vec<ScrambleOp>,
    indices: Vec<i8>,
}

impl CipherMap {
    /// Build a map from parallel operation and index sequences.
    ///
    /// # Errors
    /// [`ScrambleError::NullOrInvalid`] if the two sequences differ in
    /// length (one present without the other).
    pub fn new(ops: Vec<ScrambleOp>, indices: Vec<i8>) -> Result<CipherMap, ScrambleError> {
        if ops.len() != indices.len() {
            return Err(ScrambleError::NullOrInvalid);
        }
        Ok(CipherMap { ops, indices })
    }

    /// Construct from parallel arrays already known to have equal length
    /// (the generator builds both in one pass).
    pub(crate) fn from_parts(ops: Vec<ScrambleOp>, indices: Vec<i8>) -> CipherMap {
        debug_assert_eq!(ops.len(), indices.len());
        CipherMap { ops, indices }
    }

    /// Operation at byte position `i`. Panics if `i >= len()`.
    pub fn op_at(&self, i: usize) -> ScrambleOp {
        self.ops[i]
    }

    /// Bit index at byte position `i`. Panics if `i >= len()`.
    pub fn index_at(&self, i: usize) -> i8 {
        self.indices[i]
    }

    /// Overwrite the bit index at position `i`. Construction-time only; a
    /// map handed to the transform driver must not be mutated.
    pub fn set_index(&mut self, i: usize, value: i8) {
        self.indices[i] = value;
    }

    /// Replace the whole index array. Construction-time only.
    ///
    /// # Errors
    /// [`ScrambleError::NullOrInvalid`] if the replacement length does not
    /// match the operation count.
    pub fn set_indices(&mut self, values: Vec<i8>) -> Result<(), ScrambleError> {
        if values.len() != self.ops.len() {
            return Err(ScrambleError::NullOrInvalid);
        }
        self.indices = values;
        Ok(())
    }

    /// Number of byte positions this map covers.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if the map covers no positions.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The operation array, in position order.
    pub fn ops(&self) -> &[ScrambleOp] {
        &self.ops
    }

    /// The bit-index array, in position order.
    pub fn indices(&self) -> &[i8] {
        &self.indices
    }
}
