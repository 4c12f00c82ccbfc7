// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod key_expand;

use crate::StreamCipher;

/// Next `len` keystream bytes (the encryption of `len` zero bytes).
pub(crate) fn keystream<C: StreamCipher + ?Sized>(cipher: &mut C, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    cipher.apply_keystream(&mut out);
    out
}
