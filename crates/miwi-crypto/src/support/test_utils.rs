// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from miwi-util

#[cfg(feature = "test-utils")]
pub use miwi_util::hex_to_bytes;
