// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Hardware-generic control surface for the beacon diagnostics firmware.
//!
//! This crate is `no_std` and has no dependency on a concrete HAL: the
//! surface in [`console`] is generic over the `embedded-hal` pin and delay
//! traits plus `embedded-io` for the serial channel, so the same code runs
//! on the RP2040 target and under host tests with recording fakes.

#![no_std]

pub mod console;
pub mod error;

// Re-export commonly used types
pub use console::{Base, Console};
pub use console::{BAUD_RATE, BLINK_PERIOD_MS};
pub use console::{BINARY_LABEL, DECIMAL_LABEL, SELF_TEST_LABEL};
pub use error::Error;
