// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// References:
// [1] RFC 1321: The MD5 Message-Digest Algorithm, Appendix A.5 test suite
//     https://www.rfc-editor.org/rfc/rfc1321

use miwi_util::hex_to_bytes;

use super::counting_bytes;
use crate::{HashEngine, MD5_DIGEST_LEN, Md5, md5};

fn assert_md5(msg: &[u8], expected_hex: &str) {
    let digest = md5(msg);
    assert_eq!(
        digest.to_vec(),
        hex_to_bytes(expected_hex),
        "MD5 mismatch for {}-byte message",
        msg.len()
    );
}

#[test]
fn test_md5_empty() {
    assert_md5(b"", "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_md5_single_char() {
    assert_md5(b"a", "0cc175b9c0f1b6a831c399e269772661");
}

#[test]
fn test_md5_abc() {
    let digest = md5(b"abc");
    let expected = [
        0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1, 0x7f,
        0x72,
    ];

    assert_eq!(digest, expected, "MD5 hash mismatch for 'abc'");
}

#[test]
fn test_md5_rfc1321_suite() {
    assert_md5(b"message digest", "f96b697d7cb7938d525a2f31aaf161d0");
    assert_md5(b"abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b");
    assert_md5(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "d174ab98d277d9f5a5611c2c9f419d9f",
    );
    assert_md5(
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        "57edf4a22be3c955ac49da2e2107b67a",
    );
}

#[test]
fn test_md5_padding_boundaries() {
    // 55 bytes: 0x80 + length fit in one block
    // 56 bytes: length spills into a second block
    // 63/64/65: around the block edge
    assert_md5(&counting_bytes(55), "6912ee65fff2d9f9ce2508cddf8bcda0");
    assert_md5(&counting_bytes(56), "51fdd1acda72405dfdfa03fcb85896d7");
    assert_md5(&counting_bytes(63), "48a6295221902e8e0938f773a7185e72");
    assert_md5(&counting_bytes(64), "b2d3f56bc197fd985d5965079b5e7148");
    assert_md5(&counting_bytes(65), "8bd7053801c768420faf816fadba971c");
    assert_md5(&counting_bytes(128), "37eff01866ba3f538421b30b7cbefcac");
}

#[test]
fn test_md5_million_a() {
    let mut ctx = Md5::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        ctx.update(&chunk);
    }

    assert_eq!(ctx.bytes_processed(), 1_000_000);
    assert_eq!(
        ctx.finalize().to_vec(),
        hex_to_bytes("7707d6ae4e027c70eea2a935c2296f21")
    );
}

#[test]
fn test_md5_partial_block_tracks_total_len() {
    let mut ctx = Md5::new();
    ctx.update(&[0u8; 10]);
    assert_eq!(ctx.buffered_len(), 10);

    ctx.update(&[0u8; 54]);
    assert_eq!(ctx.buffered_len(), 0, "a full block compresses immediately");

    ctx.update(&[0u8; 70]);
    assert_eq!(ctx.buffered_len(), 6);
    assert_eq!(ctx.bytes_processed(), 134);
}

#[test]
fn test_md5_finalize_into() {
    let mut ctx = Md5::new();
    ctx.update(b"abc");

    let mut out = [0xffu8; MD5_DIGEST_LEN + 4];
    let written = ctx.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    assert_eq!(written, MD5_DIGEST_LEN);
    assert_eq!(out[..MD5_DIGEST_LEN], md5(b"abc"));
    assert_eq!(out[MD5_DIGEST_LEN..], [0xff; 4], "bytes past the digest are untouched");
}
