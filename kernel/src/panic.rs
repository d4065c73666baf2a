//! # Nya Kernel - A tiny kernel for NyaOS
//! Copyright (C) RainSTR Studio 2025, All rights reserved.
//!
//! This provides the panic handler with tests and normal.
//!
//! A panic may fire while the console gate is held (say, a bug inside a
//! device write), so both handlers force the gate open before printing.
//! A panic while the console is still being resolved cannot go through it
//! at all: the lazy static would wait on itself. Those go straight to the
//! UART instead.

use crate::output::console::{self, clear_lock_unsafe};
use crate::output::serial::serial_fallback;
use core::fmt;
use core::panic::PanicInfo;

/// Print a panic report through whatever path is still usable.
fn report(args: fmt::Arguments) {
    if console::is_resolving() {
        serial_fallback(args);
        return;
    }

    // The interrupted writer never runs again, so reopening the gate
    // cannot hand its device out twice.
    unsafe { clear_lock_unsafe() };
    console::_print(args);
}

// This is the default panic handler
#[cfg(not(test))]
#[panic_handler]
pub fn panic(info: &PanicInfo) -> ! {
    report(format_args!("[KERNEL PANIC] {}\n", info));
    halt_loop()
}

// And this is for test
#[cfg(test)]
#[panic_handler]
pub fn panic(info: &PanicInfo) -> ! {
    report(format_args!("[failed]\nCaused by:\n\t{}\n", info));
    crate::test::exit_qemu(crate::test::QemuExitCode::Failed);
    halt_loop()
}

pub fn halt_loop() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}
