// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash and stream cipher engines for MiWi secured-frame transport.
//!
//! # Features
//!
//! - **Streaming hashes**: MD5, SHA-1, SHA-224/256 and SHA-384/512, fed in
//!   any number of pieces
//! - **Seekable stream ciphers**: ChaCha20 and Salsa20 with 16- or 32-byte
//!   keys and random access to any keystream byte
//! - **Memory-frugal schedules**: SHA contexts can trade the full message
//!   schedule for a 16-word rolling window
//! - **Zeroized on drop**: every context wipes its state and key material
//! - **`no_std`**: no allocator, no global state
//!
//! # Quick Start
//!
//! ```rust
//! use miwi_crypto::hash::{HashEngine, Sha256, Sha256Variant};
//! use miwi_crypto::stream::{ChaCha20, KeystreamPosition, StreamCipher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let key = [0x11u8; 32];
//!     let nonce = [0x22u8; 8];
//!
//!     // Encrypt a frame body at its stream offset
//!     let mut body = *b"temperature=21.5";
//!     let mut cipher = ChaCha20::new(&key, &nonce)?;
//!     cipher.set_position(KeystreamPosition::from_bytes(640));
//!     cipher.apply_keystream(&mut body);
//!
//!     // Digest the ciphertext
//!     let mut ctx = Sha256::new(Sha256Variant::Sha256);
//!     ctx.update(&body);
//!     let mut digest = [0u8; 32];
//!     ctx.finalize_into(&mut digest)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Contents |
//! |---|---|---|
//! | [`hash`] | `miwi-hash` | `HashEngine`, `Md5`, `Sha1`, `Sha256`, `Sha512`, one-shot helpers |
//! | [`stream`] | `miwi-stream` | `StreamCipher`, `ChaCha20`, `Salsa20`, `KeystreamPosition` |
//! | [`util`] | `miwi-util` | endian conversion, constant-time comparison |

#![cfg_attr(not(test), no_std)]

pub mod engines;
pub mod support;

pub use miwi_hash as hash;
pub use miwi_stream as stream;
pub use miwi_util as util;
