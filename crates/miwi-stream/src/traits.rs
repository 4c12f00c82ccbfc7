// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed, seekable stream cipher trait.

use crate::consts::NONCE_LEN;
use crate::error::StreamCipherError;
use crate::position::KeystreamPosition;

/// Additive stream cipher with random access into its keystream.
///
/// Encryption and decryption are the same XOR with the keystream; the
/// separate names only document intent at call sites.
pub trait StreamCipher {
    /// Re-keys the context and rewinds it to position zero.
    ///
    /// `key` must be 16 or 32 bytes. A 16-byte key is used for both key
    /// halves together with the "expand 16-byte k" constants. On error the
    /// context keeps its previous key and position.
    fn key_expand(&mut self, nonce: &[u8; NONCE_LEN], key: &[u8]) -> Result<(), StreamCipherError>;

    /// XORs the keystream into `data` in place, advancing the position by `data.len()`.
    fn apply_keystream(&mut self, data: &mut [u8]);

    /// Writes `input ^ keystream` to `output`.
    fn encrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), StreamCipherError> {
        if input.len() != output.len() {
            return Err(StreamCipherError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        output.copy_from_slice(input);
        self.apply_keystream(output);
        Ok(())
    }

    /// Writes `input ^ keystream` to `output`. Identical to [`encrypt`](Self::encrypt).
    fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), StreamCipherError> {
        self.encrypt(input, output)
    }

    /// Moves to an absolute keystream byte position.
    fn set_position(&mut self, position: KeystreamPosition);

    /// Absolute position of the next keystream byte.
    fn position(&self) -> KeystreamPosition;
}
