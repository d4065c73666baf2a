//! # Nya Kernel - A tiny kernel for NyaOS
//! Copyright (C) RainSTR Studio 2025, All rights reserved.
//!
//! The library half of the kernel: boot requests, the global text console
//! and everything that prints through it.

#![no_std]
#![cfg_attr(test, no_main)]
#![cfg_attr(test, feature(custom_test_frameworks))]
#![cfg_attr(test, test_runner(crate::test::test_runner))]
#![cfg_attr(test, reexport_test_harness_main = "test_main")]
pub mod config;
pub mod libs;
pub mod output;
pub mod panic;

use limine::BaseRevision;

/* The section data define area */
#[unsafe(link_section = ".requests")]
#[used]
/// The base revision of the kernel.
pub static BASE_REVISION: BaseRevision = BaseRevision::new();
