//! Nya Kernel - A tiny kernel for NyaOS.
//! Copyright (C) RainSTR Studio 2025, All Rights Reserved.
//!
//! The main entry, jumped to by Limine once the machine is in long mode.
//! There is not much here yet: say hello on the console and halt.

#![no_std]
#![no_main]

use log::info;
use nya_kernel::output::console::{put_hexdump, CONSOLE};
use nya_kernel::{printf, BASE_REVISION};

/* The Kernel main code */
#[unsafe(no_mangle)]
pub extern "C" fn kernel_main() -> ! {
    // Check is limine version supported
    assert!(BASE_REVISION.is_supported(), "Limine version not supported");

    nya_kernel::libs::logger::init_logger(); // Init log system

    printf!("hewo\nmagic number is %i\n", 69);

    info!("Console present: {}", CONSOLE.is_present());
    printf!("Boot revision request lives at %p\n", &BASE_REVISION as *const _);
    put_hexdump(b"nya");

    nya_kernel::panic::halt_loop()
}
