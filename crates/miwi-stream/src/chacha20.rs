// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 with the original 64-bit nonce / 64-bit counter layout (Bernstein 2008)
//!
//! ```text
//! cccccccc  cccccccc  cccccccc  cccccccc
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! bbbbbbbb  bbbbbbbb  nnnnnnnn  nnnnnnnn
//! ```
//!
//! Block counter in words 12 (low) and 13 (high), nonce in words 14-15.

use miwi_util::load_u32_le;

use crate::consts::NONCE_LEN;
use crate::keystream::{Keystream, Permutation, impl_stream_cipher};

pub(crate) struct ChaCha20Core;

#[inline(always)]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(16);

    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(12);

    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(8);

    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(7);
}

impl Permutation for ChaCha20Core {
    const COUNTER_LO: usize = 12;
    const COUNTER_HI: usize = 13;

    fn load(
        state: &mut [u32; 16],
        constants: &[u32; 4],
        key_lo: &[u8],
        key_hi: &[u8],
        nonce: &[u8; NONCE_LEN],
    ) {
        state[0..4].copy_from_slice(constants);
        load_u32_le(&mut state[4..8], key_lo);
        load_u32_le(&mut state[8..12], key_hi);
        load_u32_le(&mut state[14..16], nonce);
    }

    fn double_rounds(x: &mut [u32; 16]) {
        for _ in 0..10 {
            // Columns
            quarter_round(x, 0, 4, 8, 12);
            quarter_round(x, 1, 5, 9, 13);
            quarter_round(x, 2, 6, 10, 14);
            quarter_round(x, 3, 7, 11, 15);

            // Diagonals
            quarter_round(x, 0, 5, 10, 15);
            quarter_round(x, 1, 6, 11, 12);
            quarter_round(x, 2, 7, 8, 13);
            quarter_round(x, 3, 4, 9, 14);
        }
    }
}

/// ChaCha20 stream cipher context.
///
/// Key material, the input matrix and the current keystream block are
/// zeroized on drop.
pub struct ChaCha20 {
    inner: Keystream<ChaCha20Core>,
}

impl_stream_cipher!(ChaCha20, "ChaCha20");
