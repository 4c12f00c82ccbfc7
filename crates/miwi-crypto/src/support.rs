// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Helpers for downstream tests

pub mod test_utils;
