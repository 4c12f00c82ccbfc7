// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-384 / SHA-512 per FIPS 180-4 Sections 6.4 and 6.5
//!
//! The byte counter is 128 bits wide and the padding carries the full
//! 128-bit big-endian bit length, so inputs of any practical size hash
//! correctly.

use zeroize::{Zeroize, ZeroizeOnDrop};

use miwi_util::{load_u64_be, store_u64_be};

use crate::buffer::BlockBuffer;
use crate::consts::{SHA384_DIGEST_LEN, SHA512_BLOCK_LEN, SHA512_DIGEST_LEN};
use crate::error::HashError;
use crate::schedule::ScheduleMode;
use crate::traits::HashEngine;

/// SHA-512 constants K per FIPS 180-4 Section 4.2.3
/// First 64 bits of fractional parts of cube roots of first 80 primes
const K512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// SHA-512 H(0) per FIPS 180-4 Section 5.3.5
const H0_512: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// SHA-384 H(0) per FIPS 180-4 Section 5.3.4
const H0_384: [u64; 8] = [
    0xcbbb9d5dc1059ed8,
    0x629a292a367cd507,
    0x9159015a3070dd17,
    0x152fecd8f70e5939,
    0x67332667ffc00b31,
    0x8eb44a8768581511,
    0xdb0c2e0d64f98fa7,
    0x47b5481dbefa4fa4,
];

/// Length field width in the final block
const LENGTH_FIELD_LEN: usize = 16;

/// Output variant of the SHA-512 compression function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Sha512Variant {
    /// 48-byte digest, distinct initial value
    Sha384,
    /// 64-byte digest
    #[default]
    Sha512,
}

impl Sha512Variant {
    /// Digest length in bytes
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha384 => SHA384_DIGEST_LEN,
            Self::Sha512 => SHA512_DIGEST_LEN,
        }
    }

    const fn initial_state(self) -> [u64; 8] {
        match self {
            Self::Sha384 => H0_384,
            Self::Sha512 => H0_512,
        }
    }
}

/// SHA-384/512 streaming state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha512 {
    // ═══════════════════════════════════════════════════════════════════════════
    // Hash state H(i)
    // ═══════════════════════════════════════════════════════════════════════════
    h: [u64; 8],

    // ═══════════════════════════════════════════════════════════════════════════
    // Message schedule W[0..79]; window mode only uses W[0..15]
    // ═══════════════════════════════════════════════════════════════════════════
    w: [u64; 80],

    // ═══════════════════════════════════════════════════════════════════════════
    // Input buffering
    // ═══════════════════════════════════════════════════════════════════════════
    buffer: BlockBuffer<SHA512_BLOCK_LEN>,
    total_len: u128,

    #[zeroize(skip)]
    variant: Sha512Variant,
    #[zeroize(skip)]
    mode: ScheduleMode,
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new(Sha512Variant::Sha512)
    }
}

impl Sha512 {
    /// Create a context for `variant` with the full 80-word schedule
    pub const fn new(variant: Sha512Variant) -> Self {
        Self::with_schedule(variant, ScheduleMode::Full)
    }

    /// Create a context with an explicit schedule strategy
    pub const fn with_schedule(variant: Sha512Variant, mode: ScheduleMode) -> Self {
        Self {
            h: variant.initial_state(),
            w: [0u64; 80],
            buffer: BlockBuffer::new(),
            total_len: 0,
            variant,
            mode,
        }
    }

    /// Variant fixed at construction
    pub fn variant(&self) -> Sha512Variant {
        self.variant
    }

    /// Schedule strategy fixed at construction
    pub fn schedule_mode(&self) -> ScheduleMode {
        self.mode
    }

    /// Seeds the byte counter as if `len` bytes had already been absorbed.
    ///
    /// Only valid on a block boundary; exercises the wide length field.
    #[cfg(test)]
    pub(crate) fn set_total_len(&mut self, len: u128) {
        self.total_len = len;
    }

    pub(crate) fn finish(&mut self, out: &mut [u8]) {
        let bit_len: [u8; LENGTH_FIELD_LEN] = self.total_len.wrapping_shl(3).to_be_bytes();
        let (h, w, mode) = (&mut self.h, &mut self.w, self.mode);
        self.buffer.pad(&bit_len, |block| compress(h, w, mode, block));

        // SHA-384 emits H0..H5 only
        store_u64_be(&mut out[..self.variant.digest_len()], &self.h);
        self.reset();
    }
}

impl HashEngine for Sha512 {
    const BLOCK_LEN: usize = SHA512_BLOCK_LEN;

    fn digest_len(&self) -> usize {
        self.variant.digest_len()
    }

    fn bytes_processed(&self) -> u128 {
        self.total_len
    }

    fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u128);
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

impl core::fmt::Debug for Sha512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Sha512 {{ variant: {:?}, mode: {:?}, [protected] }}",
            self.variant, self.mode
        )
    }
}

#[inline(always)]
fn bsig0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn bsig1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn ssig0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn ssig1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

fn compress(
    h: &mut [u64; 8],
    w: &mut [u64; 80],
    mode: ScheduleMode,
    block: &[u8; SHA512_BLOCK_LEN],
) {
    load_u64_be(&mut w[..16], block);

    if mode == ScheduleMode::Full {
        for t in 16..80 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

    for (t, k) in K512.iter().enumerate() {
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

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add((e & f) ^ (!e & g))
            .wrapping_add(*k)
            .wrapping_add(wt);
        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(a).wrapping_add((a & b) ^ (a & c) ^ (b & c));

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
