// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming hash trait.

use crate::HashError;

/// Incremental hash engine: initialize, add data, calculate.
///
/// Implementors own their chaining state, partial block and schedule scratch,
/// so independent contexts never share anything.
pub trait HashEngine {
    /// Compression block size in bytes
    const BLOCK_LEN: usize;

    /// Digest length of the configured variant, in bytes.
    fn digest_len(&self) -> usize;

    /// Total number of input bytes added since the last (re)initialization.
    fn bytes_processed(&self) -> u128;

    /// Adds `data` to the running hash. Any split of the input yields the same digest.
    fn update(&mut self, data: &[u8]);

    /// Pads, compresses the final block(s) and writes the digest to the front of `out`.
    ///
    /// Returns the number of bytes written. On success the context is back in
    /// its freshly initialized state (same variant and schedule mode). On
    /// error nothing is consumed and the running hash is left untouched.
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, HashError>;

    /// Discards all input and restores the initial chaining value.
    fn reset(&mut self);
}
