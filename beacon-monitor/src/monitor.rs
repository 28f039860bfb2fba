// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Port reading and line assembly.

use std::io::{ErrorKind, Read};
use std::time::Duration;

use anyhow::{Context, Result};

const READ_TIMEOUT: Duration = Duration::from_millis(500);
const READ_BUF_SIZE: usize = 256;

/// Assembles terminated lines out of an arbitrary byte stream.
///
/// The firmware ends lines with CRLF; bare LF is accepted too. Bytes of an
/// unterminated line are held until the terminator arrives.
#[derive(Default)]
pub struct LineAssembler {
    pending: Vec<u8>,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed received bytes, invoking `emit` once per completed line
    /// (terminator stripped).
    pub fn push(&mut self, bytes: &[u8], mut emit: impl FnMut(&str)) {
        for &byte in bytes {
            match byte {
                b'\n' => {
                    if self.pending.last() == Some(&b'\r') {
                        self.pending.pop();
                    }
                    emit(&String::from_utf8_lossy(&self.pending));
                    self.pending.clear();
                }
                _ => self.pending.push(byte),
            }
        }
    }
}

/// Open the port and echo the firmware's output lines.
pub fn watch(port_name: &str, baud: u32, max_lines: Option<usize>) -> Result<()> {
    let mut port = serialport::new(port_name, baud)
        .timeout(READ_TIMEOUT)
        .open()
        .with_context(|| format!("Failed to open {}", port_name))?;

    eprintln!("Monitoring {} at {} baud", port_name, baud);

    let mut assembler = LineAssembler::new();
    let mut printed = 0usize;
    let mut buf = [0u8; READ_BUF_SIZE];

    loop {
        if let Some(max) = max_lines {
            if printed >= max {
                return Ok(());
            }
        }

        let count = match port.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::TimedOut => continue,
            Err(e) => return Err(e).context("Serial read failed"),
        };

        assembler.push(&buf[..count], |line| {
            if max_lines.map_or(true, |max| printed < max) {
                println!("{}", line);
                printed += 1;
            }
        });
    }
}
