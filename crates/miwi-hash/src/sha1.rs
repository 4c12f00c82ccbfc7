// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 per FIPS 180-4 Section 6.1

use zeroize::{Zeroize, ZeroizeOnDrop};

use miwi_util::{load_u32_be, store_u32_be};

use crate::buffer::BlockBuffer;
use crate::consts::{SHA1_BLOCK_LEN, SHA1_DIGEST_LEN};
use crate::error::HashError;
use crate::schedule::ScheduleMode;
use crate::traits::HashEngine;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 streaming state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha1 {
    h: [u32; 5],
    w: [u32; 80],
    buffer: BlockBuffer<SHA1_BLOCK_LEN>,
    total_len: u64,
    #[zeroize(skip)]
    mode: ScheduleMode,
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1 {
    /// Create a context with the full 80-word schedule
    pub const fn new() -> Self {
        Self::with_schedule(ScheduleMode::Full)
    }

    /// Create a context with an explicit schedule strategy
    pub const fn with_schedule(mode: ScheduleMode) -> Self {
        Self {
            h: H0,
            w: [0u32; 80],
            buffer: BlockBuffer::new(),
            total_len: 0,
            mode,
        }
    }

    /// Schedule strategy chosen at construction
    pub fn schedule_mode(&self) -> ScheduleMode {
        self.mode
    }

    /// Finish the hash and return the 20-byte digest, resetting the context.
    pub fn finalize(&mut self) -> [u8; SHA1_DIGEST_LEN] {
        let mut out = [0u8; SHA1_DIGEST_LEN];
        self.finish(&mut out);
        out
    }

    fn finish(&mut self, out: &mut [u8]) {
        let bit_len = self.total_len.wrapping_shl(3).to_be_bytes();
        let (h, w, mode) = (&mut self.h, &mut self.w, self.mode);
        self.buffer.pad(&bit_len, |block| compress(h, w, mode, block));

        store_u32_be(&mut out[..SHA1_DIGEST_LEN], &self.h);
        self.reset();
    }
}

impl HashEngine for Sha1 {
    const BLOCK_LEN: usize = SHA1_BLOCK_LEN;

    fn digest_len(&self) -> usize {
        SHA1_DIGEST_LEN
    }

    fn bytes_processed(&self) -> u128 {
        self.total_len as u128
    }

    fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        let (h, w, mode) = (&mut self.h, &mut self.w, self.mode);
        self.buffer.absorb(data, |block| compress(h, w, mode, block));
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, HashError> {
        if out.len() < SHA1_DIGEST_LEN {
            return Err(HashError::OutputTooShort {
                expected: SHA1_DIGEST_LEN,
                actual: out.len(),
            });
        }

        self.finish(out);
        Ok(SHA1_DIGEST_LEN)
    }

    fn reset(&mut self) {
        self.zeroize();
        self.h = H0;
    }
}

impl core::fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Sha1 {{ mode: {:?}, [protected] }}", self.mode)
    }
}

fn compress(
    h: &mut [u32; 5],
    w: &mut [u32; 80],
    mode: ScheduleMode,
    block: &[u8; SHA1_BLOCK_LEN],
) {
    load_u32_be(&mut w[..16], block);

    if mode == ScheduleMode::Full {
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }
    }

    let [mut a, mut b, mut c, mut d, mut e] = *h;

    for t in 0..80 {
        let wt = match mode {
            ScheduleMode::Full => w[t],
            ScheduleMode::Window => {
                let j = t & 0x0f;
                if t >= 16 {
                    w[j] = (w[(j + 13) & 0x0f] ^ w[(j + 8) & 0x0f] ^ w[(j + 2) & 0x0f] ^ w[j])
                        .rotate_left(1);
                }
                w[j]
            }
        };

        let (f, k) = match t / 20 {
            0 => ((b & c) | (!b & d), 0x5a827999),
            1 => (b ^ c ^ d, 0x6ed9eba1),
            2 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
            _ => (b ^ c ^ d, 0xca62c1d6),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
    h[4] = h[4].wrapping_add(e);

    w.zeroize();
}
