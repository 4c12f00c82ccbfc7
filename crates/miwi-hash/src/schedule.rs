// Copyright (c) 2026 MiWi Security Maintainers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Message-schedule strategy for the SHA engines.
///
/// Both strategies produce identical digests. `Full` expands all 64 (SHA-256)
/// or 80 (SHA-1, SHA-512) schedule words before the rounds; `Window` keeps a
/// rotating 16-word window and derives each word on the round that needs it,
/// touching only the first 16 schedule slots.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// Expand the whole schedule up front
    #[default]
    Full,
    /// Recompute schedule words in a 16-word ring
    Window,
}
