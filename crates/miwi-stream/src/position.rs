// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Absolute byte offsets into a 2^70-byte keystream.

use crate::consts::BLOCK_LEN;

const POSITION_BITS: u32 = 70;
const POSITION_MASK: u128 = (1u128 << POSITION_BITS) - 1;
const OFFSET_BITS: u32 = BLOCK_LEN.trailing_zeros();

/// Absolute byte position in the keystream.
///
/// A 64-bit block counter and a 6-bit in-block offset address 2^70 bytes.
/// The wire form used by frame headers is three parts: the top 6 bits, then
/// the high and low 32-bit halves of the remaining 64 bits.
///
/// ```
/// use miwi_stream::KeystreamPosition;
///
/// let pos = KeystreamPosition::from_bytes(1_000_000);
/// assert_eq!(pos.block_counter(), 15_625);
/// assert_eq!(pos.block_offset(), 0);
/// assert_eq!(pos.into_parts(), (0, 0, 1_000_000));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeystreamPosition(u128);

impl KeystreamPosition {
    /// Start of the keystream
    pub const ZERO: Self = Self(0);

    /// Builds a position from its three-part wire form.
    ///
    /// Only the low 6 bits of `upper6` are significant; the rest are dropped.
    pub const fn from_parts(upper6: u8, high32: u32, low32: u32) -> Self {
        Self(((upper6 as u128 & 0x3f) << 64) | ((high32 as u128) << 32) | low32 as u128)
    }

    /// Position `bytes` bytes from the start of the keystream
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes as u128)
    }

    pub(crate) const fn from_block(counter: u64, offset: usize) -> Self {
        Self((((counter as u128) << OFFSET_BITS) + offset as u128) & POSITION_MASK)
    }

    /// Splits the position back into `(upper6, high32, low32)`
    pub const fn into_parts(self) -> (u8, u32, u32) {
        ((self.0 >> 64) as u8, (self.0 >> 32) as u32, self.0 as u32)
    }

    /// Keystream block holding this byte
    pub const fn block_counter(self) -> u64 {
        (self.0 >> OFFSET_BITS) as u64
    }

    /// Byte index inside the block, `0..64`
    pub const fn block_offset(self) -> usize {
        (self.0 as usize) & (BLOCK_LEN - 1)
    }

    /// Raw 70-bit value
    pub const fn as_u128(self) -> u128 {
        self.0
    }

    /// Advances by `bytes`, wrapping at 2^70.
    pub const fn wrapping_add(self, bytes: u64) -> Self {
        Self(self.0.wrapping_add(bytes as u128) & POSITION_MASK)
    }
}

impl From<u64> for KeystreamPosition {
    fn from(bytes: u64) -> Self {
        Self::from_bytes(bytes)
    }
}
