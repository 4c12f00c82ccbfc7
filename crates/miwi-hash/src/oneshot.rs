// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-message convenience wrappers.

use crate::consts::{
    MD5_DIGEST_LEN, SHA1_DIGEST_LEN, SHA224_DIGEST_LEN, SHA256_DIGEST_LEN, SHA384_DIGEST_LEN,
    SHA512_DIGEST_LEN,
};
use crate::md5::Md5;
use crate::sha1::Sha1;
use crate::sha256::{Sha256, Sha256Variant};
use crate::sha512::{Sha512, Sha512Variant};
use crate::traits::HashEngine;

/// MD5 of `data`
pub fn md5(data: &[u8]) -> [u8; MD5_DIGEST_LEN] {
    let mut ctx = Md5::new();
    ctx.update(data);
    ctx.finalize()
}

/// SHA-1 of `data`
pub fn sha1(data: &[u8]) -> [u8; SHA1_DIGEST_LEN] {
    let mut ctx = Sha1::new();
    ctx.update(data);
    ctx.finalize()
}

/// SHA-224 of `data`
pub fn sha224(data: &[u8]) -> [u8; SHA224_DIGEST_LEN] {
    let mut out = [0u8; SHA224_DIGEST_LEN];
    let mut ctx = Sha256::new(Sha256Variant::Sha224);
    ctx.update(data);
    ctx.finish(&mut out);
    out
}

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> [u8; SHA256_DIGEST_LEN] {
    let mut out = [0u8; SHA256_DIGEST_LEN];
    let mut ctx = Sha256::new(Sha256Variant::Sha256);
    ctx.update(data);
    ctx.finish(&mut out);
    out
}

/// SHA-384 of `data`
pub fn sha384(data: &[u8]) -> [u8; SHA384_DIGEST_LEN] {
    let mut out = [0u8; SHA384_DIGEST_LEN];
    let mut ctx = Sha512::new(Sha512Variant::Sha384);
    ctx.update(data);
    ctx.finish(&mut out);
    out
}

/// SHA-512 of `data`
pub fn sha512(data: &[u8]) -> [u8; SHA512_DIGEST_LEN] {
    let mut out = [0u8; SHA512_DIGEST_LEN];
    let mut ctx = Sha512::new(Sha512Variant::Sha512);
    ctx.update(data);
    ctx.finish(&mut out);
    out
}
