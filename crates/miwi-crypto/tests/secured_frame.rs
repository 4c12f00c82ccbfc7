// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Hash and stream engines used together the way a secured-frame layer does:
// encrypt each frame body at its keystream offset, digest the ciphertext.

#[cfg(test)]
mod secured_frame_tests {
    use miwi_crypto::engines::{
        ChaCha20, HashEngine, KeystreamPosition, Salsa20, ScheduleMode, Sha256, Sha256Variant,
        StreamCipher,
    };
    use miwi_crypto::hash::{SHA256_DIGEST_LEN, sha256};
    use miwi_crypto::support::test_utils::hex_to_bytes;
    use miwi_crypto::util::constant_time_eq;

    const KEY: [u8; 32] = [0x3c; 32];
    const NONCE: [u8; 8] = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

    struct Frame {
        position: KeystreamPosition,
        body: Vec<u8>,
        digest: [u8; SHA256_DIGEST_LEN],
    }

    fn seal<C: StreamCipher>(cipher: &mut C, payloads: &[&[u8]]) -> Vec<Frame> {
        payloads
            .iter()
            .map(|payload| {
                let position = cipher.position();
                let mut body = payload.to_vec();
                cipher.apply_keystream(&mut body);
                let digest = sha256(&body);
                Frame {
                    position,
                    body,
                    digest,
                }
            })
            .collect()
    }

    #[test]
    fn test_frames_open_in_any_order() {
        let payloads: [&[u8]; 4] = [b"hello", &[0xAA; 130], b"", b"last frame"];
        let mut tx = ChaCha20::new(&KEY, &NONCE).expect("Failed to new(..)");
        let frames = seal(&mut tx, &payloads);

        let mut rx = ChaCha20::new(&KEY, &NONCE).expect("Failed to new(..)");
        for i in [3, 1, 0, 2] {
            let frame = &frames[i];
            assert!(constant_time_eq(&sha256(&frame.body), &frame.digest));

            let mut plain = frame.body.clone();
            rx.set_position(frame.position);
            rx.apply_keystream(&mut plain);
            assert_eq!(plain, payloads[i]);
        }
    }

    #[test]
    fn test_tampered_frame_fails_digest_check() {
        let mut tx = Salsa20::new(&KEY[..16], &NONCE).expect("Failed to new(..)");
        let payloads: [&[u8]; 1] = [b"valve=open"];
        let mut frames = seal(&mut tx, &payloads);
        frames[0].body[0] ^= 0x01;

        assert!(!constant_time_eq(&sha256(&frames[0].body), &frames[0].digest));
    }

    #[test]
    fn test_window_schedule_digest_matches_one_shot() {
        let mut ctx = Sha256::with_schedule(Sha256Variant::Sha256, ScheduleMode::Window);
        ctx.update(b"abc");
        let mut digest = [0u8; SHA256_DIGEST_LEN];
        ctx.finalize_into(&mut digest)
            .expect("Failed to finalize_into(..)");

        assert_eq!(
            digest.to_vec(),
            hex_to_bytes("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
        assert_eq!(digest, sha256(b"abc"));
    }
}
