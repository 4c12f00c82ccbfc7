// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// MD5 digest size in bytes
pub const MD5_DIGEST_LEN: usize = 16;

/// MD5 block size in bytes
pub const MD5_BLOCK_LEN: usize = 64;

/// SHA-1 digest size in bytes
pub const SHA1_DIGEST_LEN: usize = 20;

/// SHA-1 block size in bytes
pub const SHA1_BLOCK_LEN: usize = 64;

/// SHA-224 digest size in bytes
pub const SHA224_DIGEST_LEN: usize = 28;

/// SHA-256 digest size in bytes
pub const SHA256_DIGEST_LEN: usize = 32;

/// SHA-224/256 block size in bytes
pub const SHA256_BLOCK_LEN: usize = 64;

/// SHA-384 digest size in bytes
pub const SHA384_DIGEST_LEN: usize = 48;

/// SHA-512 digest size in bytes
pub const SHA512_DIGEST_LEN: usize = 64;

/// SHA-384/512 block size in bytes
pub const SHA512_BLOCK_LEN: usize = 128;
