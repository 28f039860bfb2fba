// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error types for the control surface.

/// Failures surfaced by [`Console`](crate::console::Console) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Pin configuration or serial channel setup failed at startup.
    /// Fatal: initialization did not complete.
    HardwareInit,
    /// A channel operation ran before `initialize` succeeded, or the
    /// channel rejected the write. The caller may initialize and retry.
    ChannelNotReady,
}
