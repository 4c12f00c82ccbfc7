// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20/20 (Bernstein, "The Salsa20 family of stream ciphers")
//!
//! ```text
//! cccccccc  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  cccccccc  nnnnnnnn  nnnnnnnn
//! bbbbbbbb  bbbbbbbb  cccccccc  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  cccccccc
//! ```

use miwi_util::load_u32_le;

use crate::consts::NONCE_LEN;
use crate::keystream::{Keystream, Permutation, impl_stream_cipher};

pub(crate) struct Salsa20Core;

#[inline(always)]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

impl Permutation for Salsa20Core {
    const COUNTER_LO: usize = 8;
    const COUNTER_HI: usize = 9;

    fn load(
        state: &mut [u32; 16],
        constants: &[u32; 4],
        key_lo: &[u8],
        key_hi: &[u8],
        nonce: &[u8; NONCE_LEN],
    ) {
        state[0] = constants[0];
        state[5] = constants[1];
        state[10] = constants[2];
        state[15] = constants[3];

        load_u32_le(&mut state[1..5], key_lo);
        load_u32_le(&mut state[6..8], nonce);
        load_u32_le(&mut state[11..15], key_hi);
    }

    fn double_rounds(x: &mut [u32; 16]) {
        for _ in 0..10 {
            // Column round
            quarter_round(x, 0, 4, 8, 12);
            quarter_round(x, 5, 9, 13, 1);
            quarter_round(x, 10, 14, 2, 6);
            quarter_round(x, 15, 3, 7, 11);

            // Row round
            quarter_round(x, 0, 1, 2, 3);
            quarter_round(x, 5, 6, 7, 4);
            quarter_round(x, 10, 11, 8, 9);
            quarter_round(x, 15, 12, 13, 14);
        }
    }
}

/// Salsa20 stream cipher context, same keying and seeking contract as
/// [`ChaCha20`](crate::ChaCha20).
pub struct Salsa20 {
    inner: Keystream<Salsa20Core>,
}

impl_stream_cipher!(Salsa20, "Salsa20");
