// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word/byte conversions used by the hash and stream cipher engines.
//!
//! The `*_from_*` readers zeroize the source bytes after assembling the word,
//! the `*_to_*` writers zeroize the source word after emitting it. Engines
//! copy block bytes into scratch arrays before calling these, so the wipe
//! never touches caller-owned input.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

/// Constant-time equality comparison for byte slices.
///
/// Returns `false` immediately only on a length mismatch; otherwise every byte
/// is inspected regardless of where the first difference occurs.
///
/// # Example
///
/// ```
/// use miwi_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    core::hint::black_box(diff) == 0
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics on odd length or on a non-hex character. Test helper only.
///
/// # Example
///
/// ```
/// use miwi_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("d41d8c"), vec![0xd4, 0x1d, 0x8c]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Generates `{type}_from_le`/`{type}_to_le` and `{type}_from_be`/`{type}_to_be`.
macro_rules! impl_word_conversions {
    ($type:ty, $size:expr, $from_le:ident, $to_le:ident, $from_be:ident, $to_be:ident) => {
        #[doc = concat!("Assembles a `", stringify!($type), "` from ", stringify!($size), " little-endian bytes, zeroizing the source bytes.")]
        #[inline(always)]
        pub fn $from_le(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for (i, byte) in bytes.iter_mut().enumerate() {
                *dst |= (*byte as $type) << (8 * i);
                *byte = 0;
            }
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as little-endian bytes, zeroizing the source word.")]
        #[inline(always)]
        pub fn $to_le(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            *src = 0;
        }

        #[doc = concat!("Assembles a `", stringify!($type), "` from ", stringify!($size), " big-endian bytes, zeroizing the source bytes.")]
        #[inline(always)]
        pub fn $from_be(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for byte in bytes.iter_mut() {
                *dst = (*dst << 8) | (*byte as $type);
                *byte = 0;
            }
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as big-endian bytes, zeroizing the source word.")]
        #[inline(always)]
        pub fn $to_be(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * ($size - 1 - i))) as u8;
            }
            *src = 0;
        }
    };
}

impl_word_conversions!(u32, 4, u32_from_le, u32_to_le, u32_from_be, u32_to_be);
impl_word_conversions!(u64, 8, u64_from_le, u64_to_le, u64_from_be, u64_to_be);

/// Loads `words.len()` little-endian `u32` words from `bytes`.
///
/// `bytes` must hold at least `4 * words.len()` bytes; extra bytes are ignored.
#[inline]
pub fn load_u32_le(words: &mut [u32], bytes: &[u8]) {
    let mut tmp = [0u8; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        tmp.copy_from_slice(chunk);
        u32_from_le(word, &mut tmp);
    }
}

/// Loads `words.len()` big-endian `u32` words from `bytes`.
#[inline]
pub fn load_u32_be(words: &mut [u32], bytes: &[u8]) {
    let mut tmp = [0u8; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        tmp.copy_from_slice(chunk);
        u32_from_be(word, &mut tmp);
    }
}

/// Loads `words.len()` big-endian `u64` words from `bytes`.
#[inline]
pub fn load_u64_be(words: &mut [u64], bytes: &[u8]) {
    let mut tmp = [0u8; 8];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        tmp.copy_from_slice(chunk);
        u64_from_be(word, &mut tmp);
    }
}

/// Stores `words` as little-endian bytes into the front of `out`.
///
/// The words themselves are left untouched; only the staging copy is wiped.
#[inline]
pub fn store_u32_le(out: &mut [u8], words: &[u32]) {
    let mut tmp = [0u8; 4];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        let mut w = *word;
        u32_to_le(&mut w, &mut tmp);
        chunk.copy_from_slice(&tmp);
    }
    tmp.fill(0);
}

/// Stores `words` as big-endian bytes into the front of `out`.
#[inline]
pub fn store_u32_be(out: &mut [u8], words: &[u32]) {
    let mut tmp = [0u8; 4];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        let mut w = *word;
        u32_to_be(&mut w, &mut tmp);
        chunk.copy_from_slice(&tmp);
    }
    tmp.fill(0);
}

/// Stores `words` as big-endian bytes into the front of `out`.
#[inline]
pub fn store_u64_be(out: &mut [u8], words: &[u64]) {
    let mut tmp = [0u8; 8];
    for (chunk, word) in out.chunks_exact_mut(8).zip(words.iter()) {
        let mut w = *word;
        u64_to_be(&mut w, &mut tmp);
        chunk.copy_from_slice(&tmp);
    }
    tmp.fill(0);
}

/// XORs `keystream` into `data` byte by byte, up to the shorter length.
#[inline(always)]
pub fn xor_in_place(data: &mut [u8], keystream: &[u8]) {
    for (byte, ks) in data.iter_mut().zip(keystream.iter()) {
        *byte ^= ks;
    }
}
