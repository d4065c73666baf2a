//! The output gate.
//!
//! One spin lock guards the one output channel. Under the hood this is the
//! `spin` crate's spin mutex, i.e. a single atomic boolean that callers
//! compare-and-swap from `false` to `true` until they win. There is no
//! backoff, no yielding and no timeout: a caller that never gets the gate
//! spins forever.

use core::ops::{Deref, DerefMut};
use spin::{Mutex, MutexGuard};

/// Mutual exclusion over the data it wraps (the output channel).
pub struct Gate<T: ?Sized> {
    inner: Mutex<T>,
}

/// Proof of holding the gate. Dropping it releases the gate.
pub struct GateGuard<'a, T: ?Sized + 'a> {
    guard: MutexGuard<'a, T>,
}

impl<T> Gate<T> {
    /// Create an open gate around `value`.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Consume the gate and give back the guarded value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: ?Sized> Gate<T> {
    /// Spin until the gate is ours.
    pub fn acquire(&self) -> GateGuard<'_, T> {
        GateGuard {
            guard: self.inner.lock(),
        }
    }

    /// Take the gate only if nobody holds it right now.
    pub fn try_acquire(&self) -> Option<GateGuard<'_, T>> {
        self.inner.try_lock().map(|guard| GateGuard { guard })
    }

    /// Whether someone currently holds the gate.
    ///
    /// This is a snapshot; by the time the caller looks at it the answer
    /// may already be stale.
    pub fn is_held(&self) -> bool {
        self.inner.is_locked()
    }

    /// Open the gate without holding it.
    ///
    /// This is the escape hatch for fault handlers: if a critical section was
    /// interrupted (a panic or exception while printing), the gate would stay
    /// closed forever and every later message would deadlock.
    ///
    /// # Safety
    ///
    /// The gate hands out `&mut T`. Clearing it while a holder's guard is
    /// still live gives the next caller a second `&mut T` to the same value.
    /// The caller must guarantee the interrupted holder never touches the
    /// guarded value again and never drops its guard (it panicked without
    /// unwinding, was killed, or its guard was leaked).
    pub unsafe fn force_clear(&self) {
        unsafe { self.inner.force_unlock() }
    }
}

impl<T: ?Sized> Deref for GateGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T: ?Sized> DerefMut for GateGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
