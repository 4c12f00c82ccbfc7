// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Full vs window message schedule must be observationally identical

use super::counting_bytes;
use crate::{
    HashEngine, SHA1_DIGEST_LEN, SHA256_DIGEST_LEN, SHA512_DIGEST_LEN, ScheduleMode, Sha1, Sha256,
    Sha256Variant, Sha512, Sha512Variant,
};

const LENGTHS: [usize; 10] = [0, 1, 55, 56, 64, 111, 112, 128, 129, 1000];

fn digest<H: HashEngine>(mut ctx: H, msg: &[u8], out: &mut [u8]) {
    ctx.update(msg);
    ctx.finalize_into(out).expect("Failed to finalize_into(..)");
}

#[test]
fn test_default_schedule_is_full() {
    assert_eq!(ScheduleMode::default(), ScheduleMode::Full);
    assert_eq!(Sha1::new().schedule_mode(), ScheduleMode::Full);
    assert_eq!(
        Sha256::new(Sha256Variant::Sha224).schedule_mode(),
        ScheduleMode::Full
    );
    assert_eq!(
        Sha512::new(Sha512Variant::Sha384).schedule_mode(),
        ScheduleMode::Full
    );
}

#[test]
fn test_sha1_window_matches_full() {
    for len in LENGTHS {
        let msg = counting_bytes(len);
        let mut full = [0u8; SHA1_DIGEST_LEN];
        let mut window = [0u8; SHA1_DIGEST_LEN];
        digest(Sha1::with_schedule(ScheduleMode::Full), &msg, &mut full);
        digest(Sha1::with_schedule(ScheduleMode::Window), &msg, &mut window);

        assert_eq!(full, window, "len {len}");
    }
}

#[test]
fn test_sha256_window_matches_full() {
    for variant in [Sha256Variant::Sha224, Sha256Variant::Sha256] {
        for len in LENGTHS {
            let msg = counting_bytes(len);
            let mut full = [0u8; SHA256_DIGEST_LEN];
            let mut window = [0u8; SHA256_DIGEST_LEN];
            digest(Sha256::with_schedule(variant, ScheduleMode::Full), &msg, &mut full);
            digest(Sha256::with_schedule(variant, ScheduleMode::Window), &msg, &mut window);

            assert_eq!(full, window, "{variant:?} len {len}");
        }
    }
}

#[test]
fn test_sha512_window_matches_full() {
    for variant in [Sha512Variant::Sha384, Sha512Variant::Sha512] {
        for len in LENGTHS {
            let msg = counting_bytes(len);
            let mut full = [0u8; SHA512_DIGEST_LEN];
            let mut window = [0u8; SHA512_DIGEST_LEN];
            digest(Sha512::with_schedule(variant, ScheduleMode::Full), &msg, &mut full);
            digest(Sha512::with_schedule(variant, ScheduleMode::Window), &msg, &mut window);

            assert_eq!(full, window, "{variant:?} len {len}");
        }
    }
}

#[test]
fn test_schedule_mode_survives_finalize() {
    let mut ctx = Sha256::with_schedule(Sha256Variant::Sha224, ScheduleMode::Window);
    ctx.update(b"abc");
    let mut out = [0u8; SHA256_DIGEST_LEN];
    ctx.finalize_into(&mut out).expect("Failed to finalize_into(..)");

    assert_eq!(ctx.schedule_mode(), ScheduleMode::Window);
    assert_eq!(ctx.variant(), Sha256Variant::Sha224);
}
