// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use anyhow::Result;
use clap::Parser;

use crate::monitor;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "beacon-monitor")]
#[command(about = "Serial console monitor for the beacon firmware")]
pub struct Cli {
    /// Serial port (e.g., /dev/ttyACM0)
    #[arg(short, long)]
    pub port: String,

    /// Baud rate
    #[arg(short, long, default_value = "9600")]
    pub baud: u32,

    /// Stop after printing this many lines (default: run until interrupted)
    #[arg(short, long)]
    pub lines: Option<usize>,
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    monitor::watch(&cli.port, cli.baud, cli.lines)
}
