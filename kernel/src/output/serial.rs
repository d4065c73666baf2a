//! The COM1 UART as the console's text device.

use kconsole::TextDevice;
use uart_16550::SerialPort;
use x86_64::instructions::port::{Port, PortReadOnly};

// Register offsets from the UART base.
const LINE_STATUS_REG: u16 = 5;
const SCRATCH_REG: u16 = 7;

const PROBE_PATTERN: u8 = 0xAE;

/// A floating bus reads back all ones.
const NO_DEVICE: u8 = 0xFF;

/// Put one byte on the wire exactly as given.
pub trait RawTransmit {
    fn transmit(&mut self, byte: u8);
}

impl RawTransmit for SerialPort {
    // `send` would turn `\n` into `\r\n` and backspace/DEL into erase
    // sequences; the console wants its bytes untouched.
    fn transmit(&mut self, byte: u8) {
        self.send_raw(byte);
    }
}

fn transmit_all<T: RawTransmit>(port: &mut T, bytes: &[u8]) {
    for &byte in bytes {
        port.transmit(byte);
    }
}

pub struct SerialDevice {
    base: u16,
    port: SerialPort,
}

impl SerialDevice {
    /// Look for a 16550 at `base` and bring it up.
    ///
    /// Returns `None` when nothing echoes the scratch register, so the
    /// console stays silent instead of poking at an empty port.
    pub fn probe(base: u16) -> Option<Self> {
        let mut scratch = Port::<u8>::new(base + SCRATCH_REG);
        let echoed = unsafe {
            scratch.write(PROBE_PATTERN);
            scratch.read()
        };
        if echoed != PROBE_PATTERN {
            return None;
        }

        let mut port = unsafe { SerialPort::new(base) };
        port.init();
        Some(Self { base, port })
    }
}

impl TextDevice for SerialDevice {
    fn is_available(&self) -> bool {
        let mut line_status = PortReadOnly::<u8>::new(self.base + LINE_STATUS_REG);
        unsafe { line_status.read() != NO_DEVICE }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        transmit_all(&mut self.port, bytes);
    }
}

/// Print straight to a freshly initialised UART, bypassing the console.
///
/// For the panic path when the console itself cannot be reached, e.g. a
/// panic while it is still being resolved.
pub fn serial_fallback(args: core::fmt::Arguments) {
    use core::fmt::Write;

    let mut serial_port = unsafe { SerialPort::new(crate::config::CONSOLE_SERIAL_PORT) };
    serial_port.init();
    let _ = serial_port.write_fmt(args);
}
