// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

use beacon_core::{Base, Console, BAUD_RATE};
use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;
use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::fugit::RateExtU32;
use rp2040_hal::gpio::Pins;
use rp2040_hal::uart::{DataBits, StopBits, UartConfig, UartPeripheral};
use rp2040_hal::{pac, Clock, Sio, Timer, Watchdog};

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Pin driving the on-board LED (GPIO25 on the Pico).
const LED_PIN: u8 = 25;

#[entry]
fn main() -> ! {
    defmt::println!("Beacon firmware started");

    let mut pac = pac::Peripherals::take()
        .unwrap_or_else(|| defmt::panic!("HardwareInit: peripherals already taken"));
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap_or_else(|_| defmt::panic!("HardwareInit: clock setup failed"));

    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(pac.IO_BANK0, pac.PADS_BANK0, sio.gpio_bank0, &mut pac.RESETS);
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // UART0 on GP0 (TX) / GP1 (RX), 9600 8N1
    let uart_pins = (pins.gpio0.into_function(), pins.gpio1.into_function());
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap_or_else(|_| defmt::panic!("HardwareInit: UART0 enable failed"));

    let led_pin = pins.gpio25.into_push_pull_output();

    let mut console = Console::new(uart, led_pin, timer);
    if let Err(e) = console.initialize() {
        defmt::panic!("Console initialization failed: {:?}", e);
    }
    defmt::println!("Serial channel open at {} baud, LED on GP{}", BAUD_RATE, LED_PIN);

    if let Err(e) = console.print_number(42, Base::Decimal) {
        defmt::warn!("print_number (decimal) failed: {:?}", e);
    }
    if let Err(e) = console.print_number(42, Base::Binary) {
        defmt::warn!("print_number (binary) failed: {:?}", e);
    }
    if let Err(e) = console.self_test(1, 2) {
        defmt::warn!("self_test failed: {:?}", e);
    }

    defmt::println!("Diagnostics printed, entering blink loop");
    console.blink_forever()
}
