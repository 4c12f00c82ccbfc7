// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hash finalization error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// Output slice cannot hold the digest of the configured variant
    #[error("output buffer too short: need {expected} bytes, got {actual}")]
    OutputTooShort {
        /// Digest length of the configured variant
        expected: usize,
        /// Length of the slice supplied by the caller
        actual: usize,
    },
}
