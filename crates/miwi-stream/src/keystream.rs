// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block-counter keystream machinery shared by ChaCha20 and Salsa20.
//!
//! Both ciphers keep a 16-word input matrix, run ten double rounds over a
//! copy of it and add the input back in. They differ only in where the
//! constants, key, nonce and counter words sit and in the round function,
//! which is what [`Permutation`] captures.

use core::marker::PhantomData;

use tracing::{debug, trace};
use zeroize::Zeroize;

use miwi_util::{store_u32_le, xor_in_place};

use crate::consts::{BLOCK_LEN, KEY_LEN_128, KEY_LEN_256, NONCE_LEN, SIGMA, TAU};
use crate::error::StreamCipherError;
use crate::position::KeystreamPosition;

/// Matrix layout and core rounds of one cipher.
pub(crate) trait Permutation {
    /// Input word holding the low half of the block counter
    const COUNTER_LO: usize;
    /// Input word holding the high half of the block counter
    const COUNTER_HI: usize;

    /// Writes constants, both key halves and the nonce into `state`.
    ///
    /// Counter words are left at zero.
    fn load(
        state: &mut [u32; 16],
        constants: &[u32; 4],
        key_lo: &[u8],
        key_hi: &[u8],
        nonce: &[u8; NONCE_LEN],
    );

    /// Ten double rounds, in place.
    fn double_rounds(x: &mut [u32; 16]);
}

pub(crate) struct Keystream<P> {
    state: [u32; 16],
    working: [u32; 16],
    block: [u8; BLOCK_LEN],
    // 0..=BLOCK_LEN; BLOCK_LEN means the block is used up and the counter
    // advances on the next byte
    offset: usize,
    _permutation: PhantomData<P>,
}

impl<P> Zeroize for Keystream<P> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.working.zeroize();
        self.block.zeroize();
        self.offset.zeroize();
    }
}

impl<P> Drop for Keystream<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: Permutation> Keystream<P> {
    pub(crate) fn new(key: &[u8], nonce: &[u8; NONCE_LEN]) -> Result<Self, StreamCipherError> {
        let mut keystream = Self {
            state: [0u32; 16],
            working: [0u32; 16],
            block: [0u8; BLOCK_LEN],
            offset: 0,
            _permutation: PhantomData,
        };
        keystream.key_expand(nonce, key)?;
        Ok(keystream)
    }

    pub(crate) fn key_expand(
        &mut self,
        nonce: &[u8; NONCE_LEN],
        key: &[u8],
    ) -> Result<(), StreamCipherError> {
        let (constants, key_hi) = match key.len() {
            KEY_LEN_128 => (&TAU, key),
            KEY_LEN_256 => (&SIGMA, &key[KEY_LEN_128..]),
            len => {
                debug!(key_len = len, "rejected stream cipher key");
                return Err(StreamCipherError::InvalidKeyLength { len });
            }
        };

        self.state.zeroize();
        P::load(
            &mut self.state,
            constants,
            &key[..KEY_LEN_128],
            key_hi,
            nonce,
        );
        self.refill();
        self.offset = 0;

        Ok(())
    }

    pub(crate) fn apply(&mut self, data: &mut [u8]) {
        let mut done = 0;
        while done < data.len() {
            if self.offset >= BLOCK_LEN {
                self.advance();
            }

            let take = core::cmp::min(BLOCK_LEN - self.offset, data.len() - done);
            xor_in_place(
                &mut data[done..done + take],
                &self.block[self.offset..self.offset + take],
            );

            self.offset += take;
            done += take;
        }
    }

    pub(crate) fn seek(&mut self, position: KeystreamPosition) {
        let counter = position.block_counter();
        self.state[P::COUNTER_LO] = counter as u32;
        self.state[P::COUNTER_HI] = (counter >> 32) as u32;
        self.refill();
        self.offset = position.block_offset();

        trace!(counter, offset = self.offset, "keystream position set");
    }

    pub(crate) fn position(&self) -> KeystreamPosition {
        KeystreamPosition::from_block(self.counter(), self.offset)
    }

    pub(crate) fn counter(&self) -> u64 {
        ((self.state[P::COUNTER_HI] as u64) << 32) | self.state[P::COUNTER_LO] as u64
    }

    /// Steps the 64-bit counter, carrying from the low word into the high one.
    fn advance(&mut self) {
        let lo = self.state[P::COUNTER_LO].wrapping_add(1);
        self.state[P::COUNTER_LO] = lo;
        if lo == 0 {
            self.state[P::COUNTER_HI] = self.state[P::COUNTER_HI].wrapping_add(1);
        }

        self.refill();
        self.offset = 0;
    }

    /// Regenerates `block` from the current input matrix.
    fn refill(&mut self) {
        self.working.copy_from_slice(&self.state);
        P::double_rounds(&mut self.working);

        for (w, s) in self.working.iter_mut().zip(self.state.iter()) {
            *w = w.wrapping_add(*s);
        }

        store_u32_le(&mut self.block, &self.working);
        self.working.zeroize();
    }
}

/// Wires a `Keystream<P>` newtype into the public cipher surface.
macro_rules! impl_stream_cipher {
    ($name:ident, $label:literal) => {
        impl $name {
            #[doc = concat!("Keys a fresh ", $label, " context positioned at byte zero.")]
            ///
            /// Fails with [`StreamCipherError::InvalidKeyLength`](crate::StreamCipherError)
            /// unless `key` is 16 or 32 bytes.
            pub fn new(
                key: &[u8],
                nonce: &[u8; $crate::consts::NONCE_LEN],
            ) -> Result<Self, $crate::error::StreamCipherError> {
                Ok(Self {
                    inner: $crate::keystream::Keystream::new(key, nonce)?,
                })
            }

            /// Current 64-bit block counter
            pub fn block_counter(&self) -> u64 {
                self.inner.counter()
            }
        }

        impl $crate::traits::StreamCipher for $name {
            fn key_expand(
                &mut self,
                nonce: &[u8; $crate::consts::NONCE_LEN],
                key: &[u8],
            ) -> Result<(), $crate::error::StreamCipherError> {
                self.inner.key_expand(nonce, key)
            }

            fn apply_keystream(&mut self, data: &mut [u8]) {
                self.inner.apply(data);
            }

            fn set_position(&mut self, position: $crate::position::KeystreamPosition) {
                self.inner.seek(position);
            }

            fn position(&self) -> $crate::position::KeystreamPosition {
                self.inner.position()
            }
        }

        impl ::zeroize::Zeroize for $name {
            fn zeroize(&mut self) {
                self.inner.zeroize();
            }
        }

        // `Keystream` wipes itself in `Drop`
        impl ::zeroize::ZeroizeOnDrop for $name {}

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!($label, " {{ [protected] }}"))
            }
        }
    };
}

pub(crate) use impl_stream_cipher;
