//! Canonical hex + ASCII dumps, 16 bytes per line.
//!
//! ```text
//! 0    6e 79 61                                         |nya.............|
//! ```

use crate::device::TextDevice;
use crate::format::{hex_digit_count, Digits, Radix};

pub const BYTES_PER_LINE: usize = 16;

const LABEL_GAP: &[u8] = b"    ";
const MISSING_BYTE: &[u8] = b"   ";

/// Write the dump of `data` to `device`. Empty input writes nothing.
pub fn write_hexdump<D: TextDevice + ?Sized>(device: &mut D, data: &[u8]) {
    let size = data.len();
    let label_width = hex_digit_count(size as u64);

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        write_line(device, line * BYTES_PER_LINE, chunk, label_width);
    }
}

fn write_line<D: TextDevice + ?Sized>(
    device: &mut D,
    offset: usize,
    chunk: &[u8],
    label_width: usize,
) {
    let label = Digits::new(offset as u64, Radix::Hex);
    for _ in label.len()..label_width {
        device.write_bytes(b"0");
    }
    device.write_bytes(label.as_bytes());
    device.write_bytes(LABEL_GAP);

    for slot in 0..BYTES_PER_LINE {
        match chunk.get(slot) {
            Some(&byte) => device.write_bytes(&hex_pair(byte)),
            None => device.write_bytes(MISSING_BYTE),
        }
    }

    let mut text = [b'.'; BYTES_PER_LINE];
    for (cell, &byte) in text.iter_mut().zip(chunk) {
        if is_printable(byte) {
            *cell = byte;
        }
    }

    device.write_bytes(LABEL_GAP);
    device.write_bytes(b"|");
    device.write_bytes(&text);
    device.write_bytes(b"|\n");
}

/// Two lowercase hex digits and a trailing space.
fn hex_pair(byte: u8) -> [u8; 3] {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    [HEX[(byte >> 4) as usize], HEX[(byte & 0xf) as usize], b' ']
}

/// Printable ASCII: `[32, 127)`.
pub const fn is_printable(byte: u8) -> bool {
    32 <= byte && byte < 127
}
