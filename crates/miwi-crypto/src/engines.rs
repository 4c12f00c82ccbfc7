// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Every engine and trait in one namespace.

pub use miwi_hash::{
    HashEngine, HashError, Md5, ScheduleMode, Sha1, Sha256, Sha256Variant, Sha512, Sha512Variant,
};
pub use miwi_stream::{ChaCha20, KeystreamPosition, Salsa20, StreamCipher, StreamCipherError};
