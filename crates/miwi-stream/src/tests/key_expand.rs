// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::keystream;
use crate::{BLOCK_LEN, ChaCha20, KeystreamPosition, Salsa20, StreamCipher, StreamCipherError};

const NONCE: [u8; 8] = [0x0a; 8];

#[test]
fn test_rejects_unsupported_key_lengths() {
    for len in [0, 8, 15, 17, 24, 31, 33, 64] {
        let key = vec![0u8; len];

        assert_eq!(
            ChaCha20::new(&key, &NONCE).map(|_| ()),
            Err(StreamCipherError::InvalidKeyLength { len }),
            "ChaCha20 accepted a {len}-byte key"
        );
        assert_eq!(
            Salsa20::new(&key, &NONCE).map(|_| ()),
            Err(StreamCipherError::InvalidKeyLength { len }),
            "Salsa20 accepted a {len}-byte key"
        );
    }
}

#[test]
fn test_accepts_128_and_256_bit_keys() {
    for len in [16, 32] {
        let key = vec![0x77u8; len];
        assert!(ChaCha20::new(&key, &NONCE).is_ok(), "ChaCha20 {len}");
        assert!(Salsa20::new(&key, &NONCE).is_ok(), "Salsa20 {len}");
    }
}

#[test]
fn test_invalid_key_length_message() {
    let err = ChaCha20::new(&[0u8; 24], &NONCE).map(|_| ()).expect_err("Expected error");

    assert_eq!(
        err.to_string(),
        "invalid key length: 24 bytes (expected 16 or 32)"
    );
}

#[test]
fn test_short_key_is_not_doubled_long_key() {
    // Same key words, different constants ("expand 16-byte k" vs "expand 32-byte k")
    let short = [0x5cu8; 16];
    let mut doubled = [0u8; 32];
    doubled[..16].copy_from_slice(&short);
    doubled[16..].copy_from_slice(&short);

    let mut a = ChaCha20::new(&short, &NONCE).expect("Failed to new(..)");
    let mut b = ChaCha20::new(&doubled, &NONCE).expect("Failed to new(..)");
    assert_ne!(keystream(&mut a, BLOCK_LEN), keystream(&mut b, BLOCK_LEN));

    let mut a = Salsa20::new(&short, &NONCE).expect("Failed to new(..)");
    let mut b = Salsa20::new(&doubled, &NONCE).expect("Failed to new(..)");
    assert_ne!(keystream(&mut a, BLOCK_LEN), keystream(&mut b, BLOCK_LEN));
}

#[test]
fn test_rekey_rewinds_to_zero() {
    let key = [0x01u8; 32];
    let mut cipher = ChaCha20::new(&key, &NONCE).expect("Failed to new(..)");
    let first = keystream(&mut cipher, 100);
    assert_eq!(cipher.position(), KeystreamPosition::from_bytes(100));

    cipher.key_expand(&NONCE, &key).expect("Failed to key_expand(..)");
    assert_eq!(cipher.position(), KeystreamPosition::ZERO);
    assert_eq!(keystream(&mut cipher, 100), first);
}

#[test]
fn test_rekey_switches_key() {
    let mut cipher = Salsa20::new(&[0x01u8; 16], &NONCE).expect("Failed to new(..)");
    cipher
        .key_expand(&NONCE, &[0x02u8; 32])
        .expect("Failed to key_expand(..)");

    let mut fresh = Salsa20::new(&[0x02u8; 32], &NONCE).expect("Failed to new(..)");
    assert_eq!(keystream(&mut cipher, 80), keystream(&mut fresh, 80));
}

#[test]
fn test_failed_rekey_keeps_previous_state() {
    let key = [0x09u8; 32];
    let mut cipher = ChaCha20::new(&key, &NONCE).expect("Failed to new(..)");
    let _ = keystream(&mut cipher, 70);

    let result = cipher.key_expand(&NONCE, &[0u8; 33]);
    assert_eq!(result, Err(StreamCipherError::InvalidKeyLength { len: 33 }));
    assert_eq!(cipher.position(), KeystreamPosition::from_bytes(70));

    let mut reference = ChaCha20::new(&key, &NONCE).expect("Failed to new(..)");
    let expected = keystream(&mut reference, 100);
    assert_eq!(keystream(&mut cipher, 30), expected[70..]);
}
