//! Typed printf arguments.
//!
//! Instead of a C `va_list`, callers hand the formatter a slice of [`Arg`]s.
//! Each value carries its own tag, so a specifier that does not match its
//! argument prints nothing instead of reading garbage.

use core::ffi::CStr;

/// One printf argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// A single byte, usually for `%c`.
    Char(u8),
    /// A byte string for `%s`. Output stops at the first zero byte, if any.
    Str(&'a [u8]),
    /// Any signed integer, sign-extended to 64 bits.
    Signed(i64),
    /// Any unsigned integer, zero-extended to 64 bits.
    Unsigned(u64),
    /// An address, usually for `%p`.
    Pointer(usize),
}

/// Integer size selected by the `l`/`ll` prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthClass {
    /// No prefix: 32 bits.
    #[default]
    Int,
    /// `l`: 64 bits.
    Long,
    /// `ll`: 64 bits.
    LongLong,
}

impl WidthClass {
    /// Cut `raw` down to the number of bits this class reads.
    pub const fn truncate(self, raw: u64) -> u64 {
        match self {
            WidthClass::Int => raw as u32 as u64,
            WidthClass::Long | WidthClass::LongLong => raw,
        }
    }
}

impl<'a> Arg<'a> {
    /// The raw 64-bit pattern of a numeric argument.
    ///
    /// Strings have no integer value and yield `None`.
    pub const fn as_integer(&self) -> Option<u64> {
        match *self {
            Arg::Char(c) => Some(c as u64),
            Arg::Signed(v) => Some(v as u64),
            Arg::Unsigned(v) => Some(v),
            Arg::Pointer(p) => Some(p as u64),
            Arg::Str(_) => None,
        }
    }

    /// The address an argument refers to, for `%p`.
    pub fn as_address(&self) -> Option<u64> {
        match *self {
            Arg::Str(s) => Some(s.as_ptr() as usize as u64),
            _ => self.as_integer(),
        }
    }

    /// The bytes `%s` prints: everything up to the first zero byte.
    pub fn as_c_str(&self) -> Option<&'a [u8]> {
        match *self {
            Arg::Str(s) => Some(until_nul(s)),
            _ => None,
        }
    }
}

/// The prefix of `bytes` before its first zero byte.
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Signed as i64: i8, i16, i32, i64, isize);
impl_from_int!(Unsigned as u64: u8, u16, u32, u64, usize);

impl From<char> for Arg<'_> {
    /// Only the low byte survives, as with a C `char`.
    fn from(value: char) -> Self {
        Arg::Char(value as u32 as u8)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Unsigned(value as u64)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(value: &'a [u8]) -> Self {
        Arg::Str(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(value: &'a CStr) -> Self {
        Arg::Str(value.to_bytes())
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Arg::Pointer(value as usize)
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Arg::Pointer(value as usize)
    }
}
