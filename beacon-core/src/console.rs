// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial-and-LED control surface.
//!
//! [`Console`] owns the three peripherals the firmware touches: the serial
//! channel, the LED pin, and a delay source. It starts uninitialized;
//! channel operations fail with [`Error::ChannelNotReady`] until
//! [`Console::initialize`] has run. [`Console::blink_forever`] is the
//! intended terminal state of a program and never returns.

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_io::Write;
use heapless::String;

use crate::error::Error;

/// Fixed baud rate of the diagnostic serial channel.
pub const BAUD_RATE: u32 = 9600;

/// Delay between LED transitions in the blink loop, in milliseconds.
pub const BLINK_PERIOD_MS: u32 = 1_000;

/// Label preceding a binary number.
pub const BINARY_LABEL: &str = "Binary output: ";
/// Label preceding a decimal number.
pub const DECIMAL_LABEL: &str = "Decimal output: ";
/// Label preceding the self-test verdict.
pub const SELF_TEST_LABEL: &str = "Self test: ";

// Longest line: 15-char label + 32 binary digits + CRLF.
const LINE_CAPACITY: usize = 64;

/// Output radix for [`Console::print_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Base {
    Binary,
    Decimal,
}

/// The control surface over owned peripherals.
pub struct Console<S, P, D> {
    serial: S,
    led: P,
    delay: D,
    ready: bool,
}

impl<S, P, D> Console<S, P, D>
where
    S: Write,
    P: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the peripherals. The surface starts uninitialized.
    pub fn new(serial: S, led: P, delay: D) -> Self {
        Self {
            serial,
            led,
            delay,
            ready: false,
        }
    }

    /// Drive the LED pin to a known low state and mark the channel open.
    ///
    /// Must succeed before [`print_number`](Self::print_number) or
    /// [`self_test`](Self::self_test) can run.
    pub fn initialize(&mut self) -> Result<(), Error> {
        self.led.set_low().map_err(|_| Error::HardwareInit)?;
        self.ready = true;
        Ok(())
    }

    /// Write `value` in the requested base under its fixed label, as one
    /// CRLF-terminated line.
    pub fn print_number(&mut self, value: i32, base: Base) -> Result<(), Error> {
        let mut line: String<LINE_CAPACITY> = String::new();
        match base {
            // Negatives print as the 32-bit two's-complement pattern.
            Base::Binary => write!(line, "{}{:b}\r\n", BINARY_LABEL, value).ok(),
            Base::Decimal => write!(line, "{}{}\r\n", DECIMAL_LABEL, value).ok(),
        };
        self.write_line(line.as_bytes())
    }

    /// Report whether `x + y == 3` on the serial channel and return it.
    ///
    /// Diagnostic only. Checked addition keeps the verdict well-defined for
    /// every input pair.
    pub fn self_test(&mut self, x: i32, y: i32) -> Result<bool, Error> {
        let passed = x.checked_add(y) == Some(3);
        let mut line: String<LINE_CAPACITY> = String::new();
        write!(line, "{}{}\r\n", SELF_TEST_LABEL, passed).ok();
        self.write_line(line.as_bytes())?;
        Ok(passed)
    }

    /// Blink the LED with a one second period until reset or power-cycle.
    ///
    /// The terminal state of a program: delay one period, LED high, delay
    /// one period, LED low, repeat. The first transition is low to high.
    pub fn blink_forever(&mut self) -> ! {
        loop {
            self.blink_cycle();
        }
    }

    /// Run blink cycles while `keep_going` holds.
    ///
    /// The predicate is the cancellation hook test harnesses use to bound
    /// the otherwise unbounded loop; the firmware itself only calls
    /// [`blink_forever`](Self::blink_forever).
    pub fn blink_while(&mut self, mut keep_going: impl FnMut() -> bool) {
        while keep_going() {
            self.blink_cycle();
        }
    }

    /// Blink a fixed number of cycles.
    pub fn blink(&mut self, count: u32) {
        for _ in 0..count {
            self.blink_cycle();
        }
    }

    fn blink_cycle(&mut self) {
        self.delay.delay_ms(BLINK_PERIOD_MS);
        self.led.set_high().ok();
        self.delay.delay_ms(BLINK_PERIOD_MS);
        self.led.set_low().ok();
    }

    /// Release the owned peripherals.
    pub fn free(self) -> (S, P, D) {
        (self.serial, self.led, self.delay)
    }

    fn write_line(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if !self.ready {
            return Err(Error::ChannelNotReady);
        }
        self.serial
            .write_all(bytes)
            .map_err(|_| Error::ChannelNotReady)?;
        self.serial.flush().map_err(|_| Error::ChannelNotReady)
    }
}
