// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 per RFC 1321.

use zeroize::{Zeroize, ZeroizeOnDrop};

use miwi_util::{load_u32_le, store_u32_le};

use crate::buffer::BlockBuffer;
use crate::consts::{MD5_BLOCK_LEN, MD5_DIGEST_LEN};
use crate::error::HashError;
use crate::traits::HashEngine;

/// Per-round left-rotation amounts
const R: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// floor(abs(sin(i + 1)) * 2^32)
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

const H0: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// MD5 streaming state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Md5 {
    h: [u32; 4],
    m: [u32; 16],
    buffer: BlockBuffer<MD5_BLOCK_LEN>,
    total_len: u64,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Create a context seeded with the MD5 initial chaining value
    pub const fn new() -> Self {
        Self {
            h: H0,
            m: [0u32; 16],
            buffer: BlockBuffer::new(),
            total_len: 0,
        }
    }

    /// Finish the hash and return the 16-byte digest, resetting the context.
    pub fn finalize(&mut self) -> [u8; MD5_DIGEST_LEN] {
        let mut out = [0u8; MD5_DIGEST_LEN];
        self.finish(&mut out);
        out
    }

    fn finish(&mut self, out: &mut [u8]) {
        // Length suffix is the message bit count, little-endian
        let bit_len = self.total_len.wrapping_shl(3).to_le_bytes();
        let (h, m) = (&mut self.h, &mut self.m);
        self.buffer.pad(&bit_len, |block| compress(h, m, block));

        store_u32_le(&mut out[..MD5_DIGEST_LEN], &self.h);
        self.reset();
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        self.buffer.len()
    }
}

impl HashEngine for Md5 {
    const BLOCK_LEN: usize = MD5_BLOCK_LEN;

    fn digest_len(&self) -> usize {
        MD5_DIGEST_LEN
    }

    fn bytes_processed(&self) -> u128 {
        self.total_len as u128
    }

    fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        let (h, m) = (&mut self.h, &mut self.m);
        self.buffer.absorb(data, |block| compress(h, m, block));
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, HashError> {
        if out.len() < MD5_DIGEST_LEN {
            return Err(HashError::OutputTooShort {
                expected: MD5_DIGEST_LEN,
                actual: out.len(),
            });
        }

        self.finish(out);
        Ok(MD5_DIGEST_LEN)
    }

    fn reset(&mut self) {
        self.zeroize();
        self.h = H0;
    }
}

impl core::fmt::Debug for Md5 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Md5 {{ [protected] }}")
    }
}

/// MD5 compression: 64 rounds in four phases of 16, feed-forward add.
fn compress(h: &mut [u32; 4], m: &mut [u32; 16], block: &[u8; MD5_BLOCK_LEN]) {
    load_u32_le(m, block);

    let [mut a, mut b, mut c, mut d] = *h;

    for i in 0..64 {
        let (f, j) = match i / 16 {
            0 => ((b & c) | (!b & d), i),
            1 => ((d & b) | (!d & c), (5 * i + 1) & 0x0f),
            2 => (b ^ c ^ d, (3 * i + 5) & 0x0f),
            _ => (c ^ (b | !d), (7 * i) & 0x0f),
        };

        let rotated = a
            .wrapping_add(f)
            .wrapping_add(K[i])
            .wrapping_add(m[j])
            .rotate_left(R[i]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);

    m.zeroize();
}
