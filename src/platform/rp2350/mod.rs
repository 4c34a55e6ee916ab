//! RP2350 platform implementation
//!
//! Hardware backend using the `rp235x-hal` crate: eight push-pull output
//! pins for the channel bank and a TIMER0 alarm as the periodic tick
//! source. Assumes the Arm core (the alarm interrupt is unmasked through
//! the NVIC).

mod channels;
mod platform;
mod timer;

pub use channels::Rp2350ChannelBank;
pub use platform::Rp2350Platform;
