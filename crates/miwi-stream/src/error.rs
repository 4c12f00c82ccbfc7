// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Stream cipher keying and buffer errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamCipherError {
    /// Key is neither 16 nor 32 bytes
    #[error("invalid key length: {len} bytes (expected 16 or 32)")]
    InvalidKeyLength {
        /// Length of the rejected key
        len: usize,
    },

    /// Out-of-place input and output slices differ in length
    #[error("input/output length mismatch: input is {input} bytes, output is {output} bytes")]
    LengthMismatch {
        /// Input slice length
        input: usize,
        /// Output slice length
        output: usize,
    },
}
