#![cfg_attr(not(test), no_std)]

//! id-beacon - self-identifying broadcast beacon for boards under test
//!
//! This library generates a low-baud, serial-like broadcast on a set of
//! physical output channels so an external prober (scope, logic analyzer,
//! bed-of-nails fixture) can recover the board's 32-bit device identifier
//! and map every output channel to its physical pin. One cycle transmits
//! the four identifier bytes followed by a per-channel signature frame,
//! pauses, and repeats forever.
//!
//! The environment owns the outer loop:
//!
//! ```ignore
//! let mut platform = Rp2350Platform::init()?;
//! let config = BeaconConfig::provisioned();
//!
//! let mut channels = platform.claim_channels()?;
//! platform.start_tick_timer(config.baud_rate)?;
//! let mut beacon = Sequencer::new(config, platform.tick_counter())?;
//!
//! loop {
//!     beacon.poll(&mut channels)?;
//! }
//! ```

// Beacon core: tick counter, signature table, frame driver, sequencer
pub mod beacon;

// Core systems (logging macros)
pub mod core;

// Platform abstraction layer with mock and hardware backends
pub mod platform;

// Embedded targets get the RTT logger and panic handler from the library
#[cfg(feature = "rp2350")]
use defmt_rtt as _;
#[cfg(feature = "rp2350")]
use panic_probe as _;
