// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming hash engines for MiWi secured-frame transport.
//!
//! MD5 (RFC 1321), SHA-1, SHA-224/256 and SHA-384/512 (FIPS 180-4), each as
//! an incremental context: construct, `update` with any split of the input,
//! then `finalize`. Contexts own all of their scratch memory and zeroize it
//! on drop. No allocation, no global state.
//!
//! ```
//! use miwi_hash::{HashEngine, Sha256, Sha256Variant, sha256};
//!
//! let mut ctx = Sha256::new(Sha256Variant::Sha256);
//! ctx.update(b"ab");
//! ctx.update(b"c");
//!
//! let mut digest = [0u8; 32];
//! ctx.finalize_into(&mut digest).expect("32-byte buffer");
//! assert_eq!(digest, sha256(b"abc"));
//! ```
//!
//! References:
//! - RFC 1321: The MD5 Message-Digest Algorithm
//! - FIPS 180-4: Secure Hash Standard (SHS)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod buffer;
mod consts;
mod error;
mod md5;
mod oneshot;
mod schedule;
mod sha1;
mod sha256;
mod sha512;
mod traits;

pub use consts::{
    MD5_BLOCK_LEN, MD5_DIGEST_LEN, SHA1_BLOCK_LEN, SHA1_DIGEST_LEN, SHA224_DIGEST_LEN,
    SHA256_BLOCK_LEN, SHA256_DIGEST_LEN, SHA384_DIGEST_LEN, SHA512_BLOCK_LEN, SHA512_DIGEST_LEN,
};
pub use error::HashError;
pub use md5::Md5;
pub use oneshot::{md5, sha1, sha224, sha256, sha384, sha512};
pub use schedule::ScheduleMode;
pub use sha1::Sha1;
pub use sha256::{Sha256, Sha256Variant};
pub use sha512::{Sha512, Sha512Variant};
pub use traits::HashEngine;
