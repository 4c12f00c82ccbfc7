// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-224 / SHA-256 per FIPS 180-4 Sections 6.2 and 6.3

use zeroize::{Zeroize, ZeroizeOnDrop};

use miwi_util::{load_u32_be, store_u32_be};

use crate::buffer::BlockBuffer;
use crate::consts::{SHA224_DIGEST_LEN, SHA256_BLOCK_LEN, SHA256_DIGEST_LEN};
use crate::error::HashError;
use crate::schedule::ScheduleMode;
use crate::traits::HashEngine;

/// SHA-256 constants K per FIPS 180-4 Section 4.2.2
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// SHA-256 H(0): first 32 bits of the fractional parts of the square roots of the first 8 primes
const H0_256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-224 H(0): second 32 bits of the fractional parts of the square roots of primes 9..16
const H0_224: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// Output variant of the SHA-256 compression function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Variant {
    /// 28-byte digest, distinct initial value
    Sha224,
    /// 32-byte digest
    #[default]
    Sha256,
}

impl Sha256Variant {
    /// Digest length in bytes
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha224 => SHA224_DIGEST_LEN,
            Self::Sha256 => SHA256_DIGEST_LEN,
        }
    }

    const fn initial_state(self) -> [u32; 8] {
        match self {
            Self::Sha224 => H0_224,
            Self::Sha256 => H0_256,
        }
    }
}

/// SHA-224/256 streaming state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    // Hash state H(i)
    h: [u32; 8],

    // Message schedule W[0..63]; window mode only uses W[0..15]
    w: [u32; 64],

    buffer: BlockBuffer<SHA256_BLOCK_LEN>,
    total_len: u64,

    #[zeroize(skip)]
    variant: Sha256Variant,
    #[zeroize(skip)]
    mode: ScheduleMode,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new(Sha256Variant::Sha256)
    }
}

impl Sha256 {
    /// Create a context for `variant` with the full 64-word schedule
    pub const fn new(variant: Sha256Variant) -> Self {
        Self::with_schedule(variant, ScheduleMode::Full)
    }

    /// Create a context with an explicit schedule strategy
    pub const fn with_schedule(variant: Sha256Variant, mode: ScheduleMode) -> Self {
        Self {
            h: variant.initial_state(),
            w: [0u32; 64],
            buffer: BlockBuffer::new(),
            total_len: 0,
            variant,
            mode,
        }
    }

    /// Variant fixed at construction
    pub fn variant(&self) -> Sha256Variant {
        self.variant
    }

    /// Schedule strategy fixed at construction
    pub fn schedule_mode(&self) -> ScheduleMode {
        self.mode
    }

    /// Writes exactly `digest_len` bytes; `out` must be at least that long.
    pub(crate) fn finish(&mut self, out: &mut [u8]) {
        let bit_len = self.total_len.wrapping_shl(3).to_be_bytes();
        let (h, w, mode) = (&mut self.h, &mut self.w, self.mode);
        self.buffer.pad(&bit_len, |block| compress(h, w, mode, block));

        // SHA-224 emits H0..H6 only
        store_u32_be(&mut out[..self.variant.digest_len()], &self.h);
        self.reset();
    }
}

impl HashEngine for Sha256 {
    const BLOCK_LEN: usize = SHA256_BLOCK_LEN;

    fn digest_len(&self) -> usize {
        self.variant.digest_len()
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
        let expected = self.variant.digest_len();
        if out.len() < expected {
            return Err(HashError::OutputTooShort {
                expected,
                actual: out.len(),
            });
        }

        self.finish(out);
        Ok(expected)
    }

    fn reset(&mut self) {
        self.zeroize();
        self.h = self.variant.initial_state();
    }
}

impl core::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Sha256 {{ variant: {:?}, mode: {:?}, [protected] }}",
            self.variant, self.mode
        )
    }
}

// Σ0, Σ1, σ0, σ1 per FIPS 180-4 Section 4.1.2

#[inline(always)]
pub(crate) fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub(crate) fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub(crate) fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub(crate) fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub(crate) fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
pub(crate) fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (z & (x ^ y))
}

fn compress(
    h: &mut [u32; 8],
    w: &mut [u32; 64],
    mode: ScheduleMode,
    block: &[u8; SHA256_BLOCK_LEN],
) {
    load_u32_be(&mut w[..16], block);

    if mode == ScheduleMode::Full {
        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

    for (t, k) in K256.iter().enumerate() {
        let wt = match mode {
            ScheduleMode::Full => w[t],
            ScheduleMode::Window => {
                let j = t & 0x0f;
                if t >= 16 {
                    w[j] = ssig1(w[(j + 14) & 0x0f])
                        .wrapping_add(w[(j + 9) & 0x0f])
                        .wrapping_add(ssig0(w[(j + 1) & 0x0f]))
                        .wrapping_add(w[j]);
                }
                w[j]
            }
        };

        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(wt);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (hi, v) in h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
        *hi = hi.wrapping_add(v);
    }

    w.zeroize();
}

#[cfg(test)]
pub(crate) fn compress_block(
    h: &mut [u32; 8],
    mode: ScheduleMode,
    block: &[u8; SHA256_BLOCK_LEN],
) {
    let mut w = [0u32; 64];
    compress(h, &mut w, mode, block);
}
