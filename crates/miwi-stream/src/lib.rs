// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seekable ChaCha20 and Salsa20 stream ciphers for MiWi secured frames.
//!
//! Both engines take a 16- or 32-byte key and an 8-byte nonce, keep a
//! 64-bit block counter and can jump to any byte of their keystream, so
//! frames that arrive out of order decrypt without replaying the stream.
//!
//! ```
//! use miwi_stream::{ChaCha20, KeystreamPosition, StreamCipher};
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 8];
//!
//! let mut frame = *b"frame payload at offset 4096";
//! let mut tx = ChaCha20::new(&key, &nonce).expect("32-byte key");
//! tx.set_position(KeystreamPosition::from_bytes(4096));
//! tx.apply_keystream(&mut frame);
//!
//! let mut rx = ChaCha20::new(&key, &nonce).expect("32-byte key");
//! rx.set_position(KeystreamPosition::from_bytes(4096));
//! rx.apply_keystream(&mut frame);
//! assert_eq!(&frame, b"frame payload at offset 4096");
//! ```
//!
//! References:
//! - D. J. Bernstein, "ChaCha, a variant of Salsa20" (2008)
//! - D. J. Bernstein, "The Salsa20 family of stream ciphers" (2007)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod chacha20;
mod consts;
mod error;
mod keystream;
mod position;
mod salsa20;
mod traits;

pub use chacha20::ChaCha20;
pub use consts::{BLOCK_LEN, KEY_LEN_128, KEY_LEN_256, NONCE_LEN};
pub use error::StreamCipherError;
pub use position::KeystreamPosition;
pub use salsa20::Salsa20;
pub use traits::StreamCipher;
