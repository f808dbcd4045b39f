// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! Error types for the bit-operation engine and transform driver.
//!
//! [`ScrambleError`] is a flat set of failure kinds; every one aborts the
//! operation in progress and is surfaced to the caller unchanged. The driver
//! never wraps, retries, or partially succeeds.

use core::fmt;

/// Errors that can occur while applying bit operations or a cipher map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleError {
    /// A bit index argument is below zero.
    NegativeIndex,
    /// A bit index exceeds the byte's addressable bit range (0..=7).
    GreaterThanLength,
    /// A swap was requested at a position with no neighbor in that direction.
    SwapAtEnd,
    /// The operation would touch the most-significant bit in a way that risks
    /// changing the byte's effective bit-length on reinterpretation.
    ///
    /// Advisory: suppressed by the explicit `allow_recast` flag at the call
    /// site, unlike the three hard errors above.
    RecastWarning,
    /// A required input (buffer or map) is absent or the pairing is invalid.
    NullOrInvalid,
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIndex => write!(f, "negative bit index"),
            Self::GreaterThanLength => write!(f, "bit index greater than byte bit length"),
            Self::SwapAtEnd => write!(f, "cannot swap at end of byte"),
            Self::RecastWarning => {
                write!(f, "operation touches the most-significant bit (recast risk)")
            }
            Self::NullOrInvalid => write!(f, "null or invalid buffer/map data"),
        }
    }
}

impl std::error::Error for ScrambleError {}
