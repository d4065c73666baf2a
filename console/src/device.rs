//! The seam between the console and whatever actually shows the text.

/// A sink for raw text bytes, provided by the boot/driver layer.
///
/// Writes are fire-and-forget: the console never learns whether a byte made
/// it to the screen or the wire.
pub trait TextDevice {
    /// Whether the device can take output right now.
    ///
    /// The console checks this on every call and silently drops the output
    /// when it returns `false`.
    fn is_available(&self) -> bool {
        true
    }

    /// Write `bytes` verbatim.
    fn write_bytes(&mut self, bytes: &[u8]);
}

impl<D: TextDevice + ?Sized> TextDevice for &mut D {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}
