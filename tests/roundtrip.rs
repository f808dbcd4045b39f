// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scramble-core

//! End-to-end round-trip tests: generator → transform → transform, the
//! message facade, and safe file persistence.

use scramble_core::{
    generate_map, generate_map_seeded, transform, CipherMap, EncodedMessage, Safe, ScrambleError,
    ScrambleOp,
};

#[test]
fn roundtrip_random_maps_random_buffers() {
    // Deterministic seeds so a failure is reproducible.
    for (seed_byte, len) in [(1u8, 1usize), (2, 16), (3, 255), (4, 1024), (5, 4096)] {
        let buffer: Vec<u8> = (0..len).map(|i| (i * 31 + seed_byte as usize) as u8).collect();
        let map = generate_map_seeded(len, &[seed_byte; 32]);

        let scrambled = transform(&buffer, &map).unwrap();
        let restored = transform(&scrambled, &map).unwrap();
        assert_eq!(restored, buffer, "roundtrip failed for len={len}");
    }
}

#[test]
fn roundtrip_shorter_map() {
    let buffer: Vec<u8> = (0..=255).collect();
    let map = generate_map(100);

    let scrambled = transform(&buffer, &map).unwrap();
    assert_eq!(&scrambled[100..], &buffer[100..], "tail must pass through");

    let restored = transform(&scrambled, &map).unwrap();
    assert_eq!(restored, buffer);
}

#[test]
fn roundtrip_every_op_at_every_safe_index() {
    let buffer: Vec<u8> = (0..=255).collect();
    for op in ScrambleOp::ALL {
        for index in 2..6i8 {
            let map =
                CipherMap::new(vec![op; buffer.len()], vec![index; buffer.len()]).unwrap();
            let scrambled = transform(&buffer, &map).unwrap();
            let restored = transform(&scrambled, &map).unwrap();
            assert_eq!(restored, buffer, "op={op:?} index={index}");
        }
    }
}

#[test]
fn empty_buffer_empty_map() {
    let map = generate_map(0);
    assert!(map.is_empty());
    assert_eq!(transform(&[], &map).unwrap(), Vec::<u8>::new());
}

#[test]
fn boundary_rejections() {
    for value in [0u8, 1, 0x7F, 0x80, 0xFF] {
        let left = CipherMap::new(vec![ScrambleOp::SwapLeft], vec![7]).unwrap();
        assert_eq!(
            transform(&[value], &left).unwrap_err(),
            ScrambleError::SwapAtEnd
        );
        let right = CipherMap::new(vec![ScrambleOp::SwapRight], vec![0]).unwrap();
        assert_eq!(
            transform(&[value], &right).unwrap_err(),
            ScrambleError::SwapAtEnd
        );
    }
}

#[test]
fn message_facade_roundtrip() {
    let plaintext = b"Hello World, I hope there's no more testing to be done here.";
    let msg = EncodedMessage::encode(plaintext).unwrap();
    assert_eq!(msg.map().len(), plaintext.len());
    assert_eq!(msg.decode().unwrap(), plaintext);
}

#[test]
fn safe_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("de_cipher.safe");

    let plaintext = b"Hello World, I hope there's no more testing to be done here.";
    let msg = EncodedMessage::encode(plaintext).unwrap();
    Safe::new(msg).write(&path).unwrap();

    let loaded = Safe::read(&path).unwrap();
    assert_eq!(loaded.msg().decode().unwrap(), plaintext);
}

#[test]
fn map_separable_from_payload() {
    // The map and the scrambled bytes travel independently and recombine.
    let plaintext = b"separate storage and transport";
    let msg = EncodedMessage::encode(plaintext).unwrap();

    let stored_map = msg.map().clone();
    let stored_bytes = msg.encoded().to_vec();
    drop(msg);

    let rebuilt = EncodedMessage::from_parts(stored_bytes, stored_map);
    assert_eq!(rebuilt.decode().unwrap(), plaintext);
}
