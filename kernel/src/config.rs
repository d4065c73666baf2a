//! Compile-time kernel configuration.

use log::LevelFilter;

/// I/O base of the UART the console talks to (COM1).
pub const CONSOLE_SERIAL_PORT: u16 = 0x3F8;

/// Most verbose level the kernel logger lets through.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
