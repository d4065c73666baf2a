//! The printf-subset interpreter.
//!
//! Supported conversions: `%c`, `%s`, `%p`, `%x`, `%i` and `%%`, with the
//! `l`/`ll` width prefixes on the integer ones. Anything else after a `%` is
//! swallowed without output. There are no flags, widths or precisions.

use crate::arg::{Arg, WidthClass};
use crate::device::TextDevice;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Enough room for `u64::MAX` in decimal (20 digits) and in hex (16).
const DIGIT_BUFFER_LEN: usize = 20;

/// `0x` plus sixteen hex digits.
pub const POINTER_FIELD_WIDTH: usize = 18;

/// Text printed for a null `%p`.
pub const NULL_POINTER: &[u8] = b"(null)";

/// Number base for integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Hex = 16,
    Decimal = 10,
}

/// An integer rendered into a stack buffer.
///
/// Digits are written from the end of the buffer backwards, so the used
/// suffix is already in most-significant-first order.
pub struct Digits {
    buf: [u8; DIGIT_BUFFER_LEN],
    start: usize,
}

impl Digits {
    pub fn new(mut value: u64, radix: Radix) -> Self {
        let base = radix as u64;
        let mut buf = [0; DIGIT_BUFFER_LEN];
        let mut start = DIGIT_BUFFER_LEN;

        loop {
            start -= 1;
            buf[start] = HEX_DIGITS[(value % base) as usize];
            value /= base;
            if value == 0 {
                break;
            }
        }

        Self { buf, start }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    pub fn len(&self) -> usize {
        DIGIT_BUFFER_LEN - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of hex digits needed to write `value` (zero needs none).
pub const fn hex_digit_count(mut value: u64) -> usize {
    let mut count = 0;
    while value != 0 {
        value >>= 4;
        count += 1;
    }
    count
}

/// Render a non-null pointer as `0x` followed by sixteen zero-padded
/// lowercase hex digits.
pub fn pointer_field(value: u64) -> [u8; POINTER_FIELD_WIDTH] {
    let mut field = [b'0'; POINTER_FIELD_WIDTH];
    field[1] = b'x';

    let digits = Digits::new(value, Radix::Hex);
    field[POINTER_FIELD_WIDTH - digits.len()..].copy_from_slice(digits.as_bytes());
    field
}

/// What a `%` directive asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    Char,
    Str,
    Pointer,
    Hex(WidthClass),
    Decimal(WidthClass),
    Percent,
    /// Unsupported or missing conversion character.
    Unknown,
}

impl Specifier {
    /// Decode the directive in `rest`, which starts right after the `%`.
    ///
    /// Returns the specifier and how many bytes of `rest` it used.
    pub fn parse(rest: &[u8]) -> (Self, usize) {
        let Some(&first) = rest.first() else {
            return (Specifier::Unknown, 0);
        };

        let spec = match first {
            b'c' => Specifier::Char,
            b's' => Specifier::Str,
            b'p' => Specifier::Pointer,
            b'x' => Specifier::Hex(WidthClass::Int),
            b'i' => Specifier::Decimal(WidthClass::Int),
            b'%' => Specifier::Percent,
            b'l' => return Self::parse_long(rest),
            _ => Specifier::Unknown,
        };
        (spec, 1)
    }

    // After `l` or `ll`, `i` means decimal and any other byte means hex.
    // That byte is eaten as the conversion character.
    fn parse_long(rest: &[u8]) -> (Self, usize) {
        let (class, mut used) = match rest.get(1) {
            Some(b'l') => (WidthClass::LongLong, 2),
            _ => (WidthClass::Long, 1),
        };

        let spec = match rest.get(used) {
            Some(b'i') => Specifier::Decimal(class),
            _ => Specifier::Hex(class),
        };
        if used < rest.len() {
            used += 1;
        }
        (spec, used)
    }

    /// Whether this directive takes an argument off the list.
    pub const fn consumes_argument(self) -> bool {
        !matches!(self, Specifier::Percent | Specifier::Unknown)
    }

    /// Emit `arg` as this specifier dictates.
    pub fn render<D: TextDevice + ?Sized>(self, device: &mut D, arg: Option<&Arg<'_>>) {
        match self {
            Specifier::Percent => device.write_bytes(b"%"),
            Specifier::Unknown => {}
            Specifier::Char => {
                if let Some(value) = arg.and_then(Arg::as_integer) {
                    device.write_bytes(&[value as u8]);
                }
            }
            Specifier::Str => {
                if let Some(text) = arg.and_then(Arg::as_c_str) {
                    device.write_bytes(text);
                }
            }
            Specifier::Pointer => match arg.and_then(Arg::as_address) {
                Some(0) => device.write_bytes(NULL_POINTER),
                Some(address) => device.write_bytes(&pointer_field(address)),
                None => {}
            },
            Specifier::Hex(class) | Specifier::Decimal(class) => {
                let Some(raw) = arg.and_then(Arg::as_integer) else {
                    return;
                };
                let radix = if matches!(self, Specifier::Hex(_)) {
                    Radix::Hex
                } else {
                    Radix::Decimal
                };
                device.write_bytes(Digits::new(class.truncate(raw), radix).as_bytes());
            }
        }
    }
}

/// Interpret `format` against `args`, writing everything to `device`.
///
/// The format ends at its last byte or its first zero byte. Literal text
/// between directives goes out in one write per run.
pub fn write_formatted<D: TextDevice + ?Sized>(device: &mut D, format: &[u8], args: &[Arg<'_>]) {
    let format = crate::arg::until_nul(format);
    let mut args = args.iter();
    let mut run_start = 0;
    let mut pos = 0;

    while pos < format.len() {
        if format[pos] != b'%' {
            pos += 1;
            continue;
        }

        flush(device, &format[run_start..pos]);
        pos += 1;

        let (spec, used) = Specifier::parse(&format[pos..]);
        pos += used;

        let arg = if spec.consumes_argument() {
            args.next()
        } else {
            None
        };
        spec.render(device, arg);

        run_start = pos;
    }

    flush(device, &format[run_start..]);
}

fn flush<D: TextDevice + ?Sized>(device: &mut D, run: &[u8]) {
    if !run.is_empty() {
        device.write_bytes(run);
    }
}
