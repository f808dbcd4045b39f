// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! Single-byte bit operations.
//!
//! Every function here is pure: `u8` in, `u8` out, no hidden state. Bits are
//! indexed 0 (least significant) through 7 (most significant), always within
//! the fixed 8-bit frame.
//!
//! The operations the cipher map draws on (invert, swaps, compound inverse
//! swaps, full complement, shred) are all involutions: applying the same
//! operation twice at the same index restores the original byte. That is the
//! property the whole codec rests on — scrambling and unscrambling are the
//! same pass with the same map.
//!
//! Operations that can touch the most-significant bit take an `allow_recast`
//! flag. Flipping the MSB risks changing the byte's effective bit-length when
//! the value is later reinterpreted through a narrower representation, so it
//! is guarded rather than silent; callers decide at the call site, they do
//! not catch the advisory reactively.

use crate::error::ScrambleError;

/// Index of the most-significant bit in the fixed 8-bit frame.
const MSB: i8 = 7;

/// Bits flipped by [`shred`]: 0, 2, 4, 6.
const SHRED_MASK: u8 = 0b0101_0101;

/// Reject indexes outside the 8-bit frame.
fn check_index(index: i8) -> Result<(), ScrambleError> {
    if index < 0 {
        return Err(ScrambleError::NegativeIndex);
    }
    if index > MSB {
        return Err(ScrambleError::GreaterThanLength);
    }
    Ok(())
}

/// Flip the bit at `index`.
///
/// # Errors
/// - [`ScrambleError::NegativeIndex`] / [`ScrambleError::GreaterThanLength`]
///   if `index` is outside `0..=7`.
/// - [`ScrambleError::RecastWarning`] if `index` is the most-significant bit
///   and `allow_recast` is false.
pub fn invert_bit(value: u8, index: i8, allow_recast: bool) -> Result<u8, ScrambleError> {
    check_index(index)?;
    if index == MSB && !allow_recast {
        return Err(ScrambleError::RecastWarning);
    }
    Ok(value ^ (1 << index))
}

/// Exchange the bit at `index` with the bit at `index + 1`.
///
/// # Errors
/// - [`ScrambleError::NegativeIndex`] / [`ScrambleError::GreaterThanLength`]
///   if `index` is outside `0..=7`.
/// - [`ScrambleError::SwapAtEnd`] if `index` is already the top bit.
pub fn swap_left(value: u8, index: i8) -> Result<u8, ScrambleError> {
    check_index(index)?;
    if index == MSB {
        return Err(ScrambleError::SwapAtEnd);
    }
    Ok(swap_unchecked(value, index, index + 1))
}

/// Exchange the bit at `index` with the bit at `index - 1`.
///
/// # Errors
/// - [`ScrambleError::NegativeIndex`] / [`ScrambleError::GreaterThanLength`]
///   if `index` is outside `0..=7`.
/// - [`ScrambleError::SwapAtEnd`] if `index` is 0.
/// - [`ScrambleError::RecastWarning`] if `index` is one below the
///   most-significant bit and `allow_recast` is false.
pub fn swap_right(value: u8, index: i8, allow_recast: bool) -> Result<u8, ScrambleError> {
    check_index(index)?;
    if index == 0 {
        return Err(ScrambleError::SwapAtEnd);
    }
    if index == MSB - 1 && !allow_recast {
        return Err(ScrambleError::RecastWarning);
    }
    Ok(swap_unchecked(value, index, index - 1))
}

/// General two-bit exchange.
///
/// If the bits at `pos0` and `pos1` are equal (including `pos0 == pos1`),
/// the byte is returned unchanged — a no-op is a valid outcome, not an
/// error. Otherwise both positions are flipped with a single XOR mask.
///
/// # Errors
/// - [`ScrambleError::NegativeIndex`] / [`ScrambleError::GreaterThanLength`]
///   if either position is outside `0..=7`.
pub fn swap(value: u8, pos0: i8, pos1: i8) -> Result<u8, ScrambleError> {
    check_index(pos0)?;
    check_index(pos1)?;
    Ok(swap_unchecked(value, pos0, pos1))
}

/// Two-bit exchange with positions already validated.
fn swap_unchecked(value: u8, pos0: i8, pos1: i8) -> u8 {
    let b0 = (value >> pos0) & 1;
    let b1 = (value >> pos1) & 1;
    if b0 == b1 {
        return value;
    }
    value ^ ((1 << pos0) | (1 << pos1))
}

/// Exchange bits `index` and `index + 1`, then invert both.
///
/// The recast advisory is bypassed internally: what must hold for the
/// compound operation is its own involution, not the sub-step guards. Hard
/// boundary errors still apply.
///
/// # Errors
/// Same as [`swap_left`].
pub fn inverse_left(value: u8, index: i8) -> Result<u8, ScrambleError> {
    check_index(index)?;
    if index == MSB {
        return Err(ScrambleError::SwapAtEnd);
    }
    let swapped = swap_unchecked(value, index, index + 1);
    Ok(swapped ^ ((1 << index) | (1 << (index + 1))))
}

/// Exchange bits `index` and `index - 1`, then invert both.
///
/// The recast advisory is bypassed internally, as in [`inverse_left`].
///
/// # Errors
/// Same as [`swap_right`] minus the recast case.
pub fn inverse_right(value: u8, index: i8) -> Result<u8, ScrambleError> {
    check_index(index)?;
    if index == 0 {
        return Err(ScrambleError::SwapAtEnd);
    }
    let swapped = swap_unchecked(value, index, index - 1);
    Ok(swapped ^ ((1 << index) | (1 << (index - 1))))
}

/// Bitwise complement of the whole byte. Total, always succeeds.
pub fn inverse_all(value: u8) -> u8 {
    !value
}

/// Flip bits 0, 2, 4 and 6 unconditionally, ignoring any supplied index.
pub fn shred(value: u8) -> u8 {
    value ^ SHRED_MASK
}

/// Read-only predicate: is the bit at `index` set?
///
/// # Errors
/// - [`ScrambleError::NegativeIndex`] / [`ScrambleError::GreaterThanLength`]
///   if `index` is outside `0..=7`.
pub fn is_bit_set(value: u8, index: i8) -> Result<bool, ScrambleError> {
    check_index(index)?;
    Ok((value >> index) & 1 == 1)
}
