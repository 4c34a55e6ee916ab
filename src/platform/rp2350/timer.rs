//! RP2350 tick source
//!
//! The beacon's tick clock is TIMER0 alarm 0, re-armed from its own
//! interrupt handler so it behaves as a free-running, auto-reloading
//! periodic source. The handler's only other side effect is one increment
//! of the shared tick counter; nothing else writes it.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, Ordering};

use critical_section::Mutex;
use rp235x_hal::{
    fugit::MicrosDurationU32,
    pac::{self, interrupt},
    timer::{Alarm, Alarm0, CopyableTimer0},
    Timer,
};

use crate::beacon::tick::TickCounter;
use crate::platform::{
    error::{PlatformError, TimerError},
    Result,
};

/// The RP2350 system timer counts microseconds regardless of core clock
const TIMER_RATE_HZ: u32 = 1_000_000;

/// Shared tick counter, incremented only by `TIMER0_IRQ_0`
pub(super) static TICKS: TickCounter = TickCounter::new();

/// Alarm handed to the interrupt handler once armed
static TICK_ALARM: Mutex<RefCell<Option<Alarm0<CopyableTimer0>>>> =
    Mutex::new(RefCell::new(None));

/// Bit period in microseconds, read by the handler when re-arming
static TICK_PERIOD_US: AtomicU32 = AtomicU32::new(0);

/// Arm the tick source at the given bit rate
///
/// # Errors
///
/// Returns `TimerError::InvalidRate` for a rate of zero or above the
/// timer's resolution, `TimerError::AlarmUnavailable` if alarm 0 was
/// already claimed.
pub(super) fn start(timer: &mut Timer<CopyableTimer0>, bit_rate_hz: u32) -> Result<()> {
    if bit_rate_hz == 0 || bit_rate_hz > TIMER_RATE_HZ {
        return Err(PlatformError::Timer(TimerError::InvalidRate));
    }
    let period_us = TIMER_RATE_HZ / bit_rate_hz;

    let mut alarm = timer
        .alarm_0()
        .ok_or(PlatformError::Timer(TimerError::AlarmUnavailable))?;
    TICK_PERIOD_US.store(period_us, Ordering::Relaxed);
    alarm
        .schedule(MicrosDurationU32::micros(period_us))
        .map_err(|_| PlatformError::Timer(TimerError::InvalidRate))?;
    alarm.enable_interrupt();
    critical_section::with(|cs| {
        TICK_ALARM.borrow_ref_mut(cs).replace(alarm);
    });

    // Safety: the handler only touches the statics above
    unsafe { cortex_m::peripheral::NVIC::unmask(pac::Interrupt::TIMER0_IRQ_0) };
    Ok(())
}

/// Shared tick counter handle
pub(super) fn tick_counter() -> &'static TickCounter {
    &TICKS
}

#[interrupt]
fn TIMER0_IRQ_0() {
    critical_section::with(|cs| {
        if let Some(alarm) = TICK_ALARM.borrow_ref_mut(cs).as_mut() {
            alarm.clear_interrupt();
            let period_us = TICK_PERIOD_US.load(Ordering::Relaxed);
            let _ = alarm.schedule(MicrosDurationU32::micros(period_us));
        }
    });
    TICKS.increment();
}
