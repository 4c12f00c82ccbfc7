// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Partial-block accumulator shared by every hash engine.
//!
//! Holds exactly `total_len mod N` leading bytes. Compression fires the moment
//! the block fills, never lazily on the next call.

use zeroize::Zeroize;

#[derive(Clone)]
pub(crate) struct BlockBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Zeroize for BlockBuffer<N> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.len.zeroize();
    }
}

impl<const N: usize> BlockBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Appends `data`, calling `compress` once per completed block.
    ///
    /// Full blocks found directly in `data` are compressed from the caller's
    /// slice without being staged in `bytes`.
    pub(crate) fn absorb(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; N])) {
        if self.len > 0 {
            let take = core::cmp::min(N - self.len, data.len());
            self.bytes[self.len..self.len + take].copy_from_slice(&data[..take]);
            self.len += take;
            data = &data[take..];

            if self.len < N {
                return;
            }

            compress(&self.bytes);
            self.bytes.zeroize();
            self.len = 0;
        }

        let mut blocks = data.chunks_exact(N);
        for block in &mut blocks {
            if let Ok(block) = <&[u8; N]>::try_from(block) {
                compress(block);
            }
        }

        let tail = blocks.remainder();
        self.bytes[..tail.len()].copy_from_slice(tail);
        self.len = tail.len();
    }

    /// Applies the Merkle-Damgard padding and compresses the final block(s).
    ///
    /// Appends `0x80`, zero-fills, spills into an extra block when fewer than
    /// `length_field.len()` bytes remain, and ends the last block with
    /// `length_field`. Leaves the buffer empty and zeroized.
    pub(crate) fn pad(&mut self, length_field: &[u8], mut compress: impl FnMut(&[u8; N])) {
        let tail_start = N - length_field.len();

        self.bytes[self.len] = 0x80;
        self.len += 1;

        if self.len > tail_start {
            self.bytes[self.len..].fill(0);
            compress(&self.bytes);
            self.len = 0;
        }

        self.bytes[self.len..tail_start].fill(0);
        self.bytes[tail_start..].copy_from_slice(length_field);
        compress(&self.bytes);

        self.bytes.zeroize();
        self.len = 0;
    }
}
