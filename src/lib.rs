// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! # scramble-core
//!
//! Reversible per-byte bit-scrambling codec. A [`CipherMap`] assigns one
//! bit-level operation (invert, swaps, compound inverse swaps, full
//! complement, shred) and one target bit index to each byte position;
//! [`transform`] applies the map to a buffer, and applying the same map a
//! second time restores the original. Every operation is an involution, so
//! scrambling and unscrambling are the same pass.
//!
//! This is an obfuscation/permutation codec, **not** a secure cipher: there
//! is no key derivation, no diffusion, and no resistance to known-plaintext
//! analysis. Its guarantee is purely mechanical reversibility under a known
//! map.
//!
//! # Quick start
//!
//! ```
//! use scramble_core::{generate_map, transform};
//!
//! let plaintext = b"attack at dawn".to_vec();
//! let map = generate_map(plaintext.len());
//!
//! let scrambled = transform(&plaintext, &map).unwrap();
//! let restored = transform(&scrambled, &map).unwrap();
//! assert_eq!(restored, plaintext);
//! ```
//!
//! The higher-level [`EncodedMessage`] facade keeps the map and payload
//! together, and [`Safe`] persists both to a CRC-checked file.

pub mod bitops;
pub mod error;
pub mod generate;
pub mod map;
pub mod message;
pub mod safe;
pub mod transform;

pub use error::ScrambleError;
pub use generate::{generate_map, generate_map_seeded};
pub use map::{CipherMap, ScrambleOp};
pub use message::EncodedMessage;
pub use safe::{Safe, SafeError};
pub use transform::transform;
