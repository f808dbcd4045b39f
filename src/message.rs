// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! Message-encoding facade over the generator and transform driver.
//!
//! An [`EncodedMessage`] pairs a scrambled byte buffer with the cipher map
//! that produced it. The two are separable: the map can be stored or
//! transported apart from the payload (see [`crate::safe`]) and reapplied
//! later to recover the plaintext.

use crate::error::ScrambleError;
use crate::generate::generate_map;
use crate::map::CipherMap;
use crate::transform::transform;

/// A scrambled payload together with the map that scrambled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    encoded: Vec<u8>,
    map: CipherMap,
}

impl EncodedMessage {
    /// Scramble `plaintext` under a freshly generated random map.
    ///
    /// Generated maps are boundary-valid by construction, so the inner
    /// transform cannot fail; the `Result` is kept so a generator regression
    /// surfaces instead of being swallowed.
    pub fn encode(plaintext: &[u8]) -> Result<EncodedMessage, ScrambleError> {
        let map = generate_map(plaintext.len());
        let encoded = transform(plaintext, &map)?;
        Ok(EncodedMessage { encoded, map })
    }

    /// Scramble `plaintext` under a caller-supplied map.
    ///
    /// # Errors
    /// Propagates any transform error (boundary violations in the supplied
    /// map, or a map longer than the plaintext).
    pub fn encode_with_map(
        plaintext: &[u8],
        map: CipherMap,
    ) -> Result<EncodedMessage, ScrambleError> {
        let encoded = transform(plaintext, &map)?;
        Ok(EncodedMessage { encoded, map })
    }

    /// Rewrap already-scrambled bytes with their retained map, e.g. after
    /// reading both back from storage.
    pub fn from_parts(encoded: Vec<u8>, map: CipherMap) -> EncodedMessage {
        EncodedMessage { encoded, map }
    }

    /// Recover the plaintext by reapplying the retained map.
    pub fn decode(&self) -> Result<Vec<u8>, ScrambleError> {
        transform(&self.encoded, &self.map)
    }

    /// The scrambled bytes.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    /// The cipher map used to scramble.
    pub fn map(&self) -> &CipherMap {
        &self.map
    }
}
