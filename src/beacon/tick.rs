//! Shared tick counter
//!
//! The tick counter is the only datum shared between interrupt and base
//! context: the tick timer's interrupt handler increments it once per
//! expiry, and the polling loop reads it on every poll. Single writer,
//! single reader, one atomic word — no lock needed.

use core::sync::atomic::{AtomicU32, Ordering};

/// Monotonic tick counter incremented at bit-rate frequency
///
/// `const`-constructible so hardware backends can place it in a `static`
/// reachable from the interrupt handler. The counter wraps at `u32::MAX`;
/// consumers must compare ticks with wrapping subtraction.
#[derive(Debug)]
pub struct TickCounter(AtomicU32);

impl TickCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Increment the counter by one tick
    ///
    /// Called exclusively from the tick timer interrupt.
    #[inline]
    pub fn increment(&self) {
        // Relaxed is sufficient: one writer, one reader, no dependent data
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current tick value
    #[inline]
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}
