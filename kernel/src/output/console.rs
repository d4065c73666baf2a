//! Nya Kernel - A tiny kernel for NyaOS
//! Copyright (C) RainSTR Studio 2025, All rights reserved.
//!
//! The global console and the print macros.
//!
//! The output device is resolved lazily: the first print probes the serial
//! port, and if nothing is there every later print is a no-op.

use crate::config::CONSOLE_SERIAL_PORT;
use crate::output::serial::SerialDevice;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use kconsole::Console;
use lazy_static::lazy_static;

pub use kconsole::Arg;

/// Set while the first `CONSOLE` access is probing for the device.
static RESOLVING: AtomicBool = AtomicBool::new(false);

// Some statics which is global
lazy_static! {
    pub static ref CONSOLE: Console<SerialDevice> = {
        RESOLVING.store(true, Ordering::SeqCst);
        let console = Console::new(SerialDevice::probe(CONSOLE_SERIAL_PORT));
        RESOLVING.store(false, Ordering::SeqCst);
        console
    };
}

/// Whether the console is in the middle of being resolved.
///
/// Touching `CONSOLE` now would spin forever on its own initialisation.
pub fn is_resolving() -> bool {
    RESOLVING.load(Ordering::SeqCst)
}

/// Print `text` as is.
pub fn puts(text: impl AsRef<[u8]>) {
    CONSOLE.puts(text);
}

/// printf with an explicit argument list. Prefer the [`printf!`](crate::printf) macro.
pub fn vprintf(format: impl AsRef<[u8]>, args: &[Arg<'_>]) {
    CONSOLE.vprintf(format, args);
}

/// Print a hex dump of `data`.
pub fn put_hexdump(data: &[u8]) {
    CONSOLE.put_hexdump(data);
}

/// Reopen the console gate after a crash in the middle of a print.
///
/// # Safety
///
/// The interrupted print must never resume: it still holds a `&mut` to the
/// serial device, and the next print gets another one.
pub unsafe fn clear_lock_unsafe() {
    unsafe { CONSOLE.clear_lock_unsafe() }
}

#[macro_export]
macro_rules! printf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::output::console::vprintf(
            $format,
            &[$($crate::output::console::Arg::from($arg)),*],
        )
    };
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::output::console::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    CONSOLE.write_fmt(args);
}
