// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod md5;
mod schedule_mode;

/// RFC 6234 Section 5 TEST2_1 (448 bits, forces a padding-only second block)
pub(crate) const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// RFC 6234 Section 5 TEST2_2 (896 bits, two blocks for SHA-512)
pub(crate) const MSG_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

/// Bytes 0, 1, 2, ... wrapping at 256
pub(crate) fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}
