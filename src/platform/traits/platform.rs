//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates the
//! peripheral interfaces the beacon needs: the output channel bank and the
//! periodic tick source.

use super::ChannelBankInterface;
use crate::beacon::tick::TickCounter;
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide a concrete channel bank type via an
/// associated type, enabling compile-time dispatch, plus the tick source
/// the sequencer is driven by.
///
/// Start-up contract: `init` must leave the device in a state where the
/// beacon can run unattended forever — any watchdog that would fire during
/// the broadcast pause is disabled, and every driven channel is configured
/// as a push-pull output. `start_tick_timer` arms the periodic tick source
/// and enables its interrupt.
pub trait Platform: Sized {
    /// Output channel bank type
    type Channels: ChannelBankInterface;

    /// Initialize the platform
    ///
    /// Performs platform-specific initialization: clock configuration,
    /// watchdog handling, and output pin setup for all eight channels.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if initialization fails.
    fn init() -> Result<Self>;

    /// Get system clock frequency in Hz
    ///
    /// Used to derive the tick timer reload from the baud rate.
    fn system_clock_hz(&self) -> u32;

    /// Claim the output channel bank
    ///
    /// The bank exists exactly once; it is handed out a single time.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` on a second claim.
    fn claim_channels(&mut self) -> Result<Self::Channels>;

    /// Arm the periodic tick source at the given bit rate
    ///
    /// The tick source must be free-running and auto-reloading (or
    /// re-armed from its own interrupt), firing at `bit_rate_hz`. Its sole
    /// side effect is one increment of the platform's [`TickCounter`] per
    /// expiry. Nothing else may write that counter.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the rate cannot be produced or no
    /// timer resource is available.
    fn start_tick_timer(&mut self, bit_rate_hz: u32) -> Result<()>;

    /// Get the shared tick counter
    ///
    /// Incremented only by the tick interrupt, read by the polling loop.
    fn tick_counter(&self) -> &TickCounter;
}
