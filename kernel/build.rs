// Nya Kernel - A tiny kernel for NyaOS
// Copyright (C) RainSTR Studio 2025, All Rights Reserved.
//
// The build script, which hands our linker script to the linker.

use std::env;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("Cargo always sets CARGO_MANIFEST_DIR");
    let script = Path::new(&manifest_dir).join("linker.ld");
    println!("cargo:rerun-if-changed={}", script.display());

    // Only the bare-metal build is laid out for Limine
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        println!("cargo:rustc-link-arg=-T{}", script.display());
    }
}
