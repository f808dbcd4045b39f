// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! Safe persistence: a binary container for a scrambled payload and its
//! cipher map.
//!
//! Three records in one file, length-prefixed and CRC-checked:
//!
//! ```text
//! [4 bytes] map length N (big-endian u32)
//! [N bytes] operation wire codes (see ScrambleOp::code)
//! [N bytes] bit indices (i8 stored as u8)
//! [4 bytes] payload length M (big-endian u32)
//! [M bytes] scrambled payload
//! [4 bytes] CRC-32 of everything above
//! ```
//!
//! Operation codes round-trip through the stable `ScrambleOp` ordering; an
//! unknown code on read means the file was written by a newer format or
//! corrupted, and is rejected rather than guessed at.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ScrambleError;
use crate::map::{CipherMap, ScrambleOp};
use crate::message::EncodedMessage;

/// Errors that can occur while reading or writing a safe file.
#[derive(Debug)]
pub enum SafeError {
    /// Underlying filesystem error.
    Io(io::Error),
    /// CRC mismatch or truncated/oversized record structure.
    Corrupted,
    /// An operation wire code not in the known set.
    UnknownOpCode(u8),
    /// Error from the scramble core while rebuilding the map.
    Scramble(ScrambleError),
}

impl fmt::Display for SafeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "safe file I/O error: {e}"),
            Self::Corrupted => write!(f, "safe file corrupted (CRC or record length mismatch)"),
            Self::UnknownOpCode(code) => write!(f, "unknown operation code {code}"),
            Self::Scramble(e) => write!(f, "scramble error: {e}"),
        }
    }
}

impl std::error::Error for SafeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Scramble(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SafeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ScrambleError> for SafeError {
    fn from(e: ScrambleError) -> Self {
        Self::Scramble(e)
    }
}

/// A message and its map, bound for (or loaded from) a safe file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Safe {
    msg: EncodedMessage,
}

impl Safe {
    /// Wrap an encoded message for storage.
    pub fn new(msg: EncodedMessage) -> Safe {
        Safe { msg }
    }

    /// The contained message.
    pub fn msg(&self) -> &EncodedMessage {
        &self.msg
    }

    /// Consume the safe, returning the contained message.
    pub fn into_msg(self) -> EncodedMessage {
        self.msg
    }

    /// Serialize to the safe container format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let map = self.msg.map();
        let payload = self.msg.encoded();
        let n = map.len();

        let mut out = Vec::with_capacity(4 + 2 * n + 4 + payload.len() + 4);
        out.extend_from_slice(&(n as u32).to_be_bytes());
        for op in map.ops() {
            out.push(op.code());
        }
        for &index in map.indices() {
            out.push(index as u8);
        }
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(payload);

        let crc = crc32fast::hash(&out);
        out.extend_from_slice(&crc.to_be_bytes());
        out
    }

    /// Parse a safe container, verifying the CRC.
    ///
    /// # Errors
    /// - [`SafeError::Corrupted`] on truncation, trailing garbage, or CRC
    ///   mismatch.
    /// - [`SafeError::UnknownOpCode`] if an operation code is not in the
    ///   known set.
    pub fn from_bytes(data: &[u8]) -> Result<Safe, SafeError> {
        // Smallest possible safe: empty map, empty payload.
        if data.len() < 4 + 4 + 4 {
            return Err(SafeError::Corrupted);
        }

        let body = &data[..data.len() - 4];
        let stored_crc = u32::from_be_bytes([
            data[data.len() - 4],
            data[data.len() - 3],
            data[data.len() - 2],
            data[data.len() - 1],
        ]);
        if crc32fast::hash(body) != stored_crc {
            return Err(SafeError::Corrupted);
        }

        let n = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) as usize;
        let mut pos = 4;
        if body.len() < pos + 2 * n + 4 {
            return Err(SafeError::Corrupted);
        }

        let mut ops = Vec::with_capacity(n);
        for &code in &body[pos..pos + n] {
            let op = ScrambleOp::from_code(code).ok_or(SafeError::UnknownOpCode(code))?;
            ops.push(op);
        }
        pos += n;

        let indices: Vec<i8> = body[pos..pos + n].iter().map(|&b| b as i8).collect();
        pos += n;

        let m = u32::from_be_bytes([body[pos], body[pos + 1], body[pos + 2], body[pos + 3]])
            as usize;
        pos += 4;
        if body.len() != pos + m {
            return Err(SafeError::Corrupted);
        }
        let payload = body[pos..].to_vec();

        let map = CipherMap::new(ops, indices)?;
        Ok(Safe::new(EncodedMessage::from_parts(payload, map)))
    }

    /// Write the safe container to `path`.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), SafeError> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }

    /// Read a safe container from `path`.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Safe, SafeError> {
        let data = fs::read(path)?;
        Safe::from_bytes(&data)
    }
}
