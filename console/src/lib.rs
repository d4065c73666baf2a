//! # kconsole - early kernel text output
//! Copyright (C) RainSTR Studio 2025, All rights reserved.
//!
//! A [`Console`] owns the one output channel (zero or one [`TextDevice`])
//! behind a spin [`Gate`]. Everything it prints goes out without touching
//! the heap:
//!
//! - [`Console::puts`] writes bytes verbatim,
//! - [`Console::vprintf`] (and [`console_printf!`]) interprets a small
//!   printf subset against typed [`Arg`]s,
//! - [`Console::put_hexdump`] renders a hex + ASCII dump,
//! - [`Console::write_fmt`] accepts ordinary Rust `format_args!`.
//!
//! When no device is attached, or the device says it is unavailable, all of
//! these quietly do nothing. Nothing here ever fails.

#![cfg_attr(not(test), no_std)]

pub mod arg;
pub mod device;
pub mod format;
pub mod gate;
pub mod hexdump;

pub use arg::{Arg, WidthClass};
pub use device::TextDevice;
pub use gate::{Gate, GateGuard};

use core::fmt;

/// The gate-protected output channel.
pub struct Console<D> {
    channel: Gate<Option<D>>,
}

impl<D> Console<D> {
    /// A console writing to `device`, or to nowhere when `None`.
    pub const fn new(device: Option<D>) -> Self {
        Self {
            channel: Gate::new(device),
        }
    }

    /// A console with no device. Every call is a no-op.
    pub const fn absent() -> Self {
        Self::new(None)
    }

    /// Give back the device, if there was one.
    pub fn into_device(self) -> Option<D> {
        self.channel.into_inner()
    }

    /// Force the gate open after a fault interrupted a writer.
    ///
    /// # Safety
    ///
    /// See [`Gate::force_clear`]. The interrupted writer must never touch
    /// the device again; otherwise two `&mut D` to it are live at once.
    pub unsafe fn clear_lock_unsafe(&self) {
        unsafe { self.channel.force_clear() }
    }
}

impl<D: TextDevice> Console<D> {
    /// Whether output currently has somewhere to go.
    pub fn is_present(&self) -> bool {
        self.channel
            .acquire()
            .as_ref()
            .is_some_and(TextDevice::is_available)
    }

    /// Write `text` verbatim, up to its first zero byte, in a single device
    /// write.
    pub fn puts(&self, text: impl AsRef<[u8]>) {
        self.with_device(|device| device.write_bytes(arg::until_nul(text.as_ref())));
    }

    /// Interpret `format` against `args`. See [`format`] for the accepted
    /// directives.
    ///
    /// The gate is held for the whole call, so the output of one `vprintf`
    /// is never split by another caller.
    pub fn vprintf(&self, format: impl AsRef<[u8]>, args: &[Arg<'_>]) {
        self.with_device(|device| format::write_formatted(device, format.as_ref(), args));
    }

    /// Dump `data` as hex and ASCII, 16 bytes per line.
    pub fn put_hexdump(&self, data: &[u8]) {
        self.with_device(|device| hexdump::write_hexdump(device, data));
    }

    /// Print Rust-formatted text.
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) {
        self.with_device(|device| {
            let _ = fmt::Write::write_fmt(&mut DeviceWriter(device), args);
        });
    }

    fn with_device(&self, f: impl FnOnce(&mut D)) {
        let mut channel = self.channel.acquire();
        match channel.as_mut() {
            Some(device) if device.is_available() => f(device),
            _ => {}
        }
    }
}

impl<D> Default for Console<D> {
    fn default() -> Self {
        Self::absent()
    }
}

/// `core::fmt::Write` on top of a device the caller already holds.
struct DeviceWriter<'a, D: ?Sized>(&'a mut D);

impl<D: TextDevice + ?Sized> fmt::Write for DeviceWriter<'_, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_bytes(s.as_bytes());
        Ok(())
    }
}

/// printf on a given [`Console`].
///
/// ```
/// use kconsole::{console_printf, Console, TextDevice};
///
/// struct Sink(Vec<u8>);
///
/// impl TextDevice for Sink {
///     fn write_bytes(&mut self, bytes: &[u8]) {
///         self.0.extend_from_slice(bytes);
///     }
/// }
///
/// let console = Console::new(Some(Sink(Vec::new())));
/// console_printf!(console, "magic number is %i\n", 69);
/// assert_eq!(console.into_device().unwrap().0, b"magic number is 69\n");
/// ```
#[macro_export]
macro_rules! console_printf {
    ($console:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $console.vprintf($format, &[$($crate::Arg::from($arg)),*])
    };
}
