// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sizes and constant words shared by the ChaCha20 and Salsa20 engines.

/// Keystream block size in bytes
pub const BLOCK_LEN: usize = 64;

/// Nonce size in bytes (64-bit nonce, 64-bit block counter)
pub const NONCE_LEN: usize = 8;

/// 128-bit key size in bytes
pub const KEY_LEN_128: usize = 16;

/// 256-bit key size in bytes
pub const KEY_LEN_256: usize = 32;

/// "expand 32-byte k" as little-endian words
pub(crate) const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// "expand 16-byte k" as little-endian words
pub(crate) const TAU: [u32; 4] = [0x61707865, 0x3120646e, 0x79622d36, 0x6b206574];
