//! Mock Platform implementation for testing

use crate::beacon::tick::TickCounter;
use crate::platform::{
    error::{PlatformError, TimerError},
    traits::Platform,
    Result,
};

use super::MockChannelBank;

/// Mock Platform implementation
///
/// Provides a mock channel bank and a manually advanced tick counter for
/// hardware-free testing. The simulated clock matches the reference
/// board's ~1 MHz source so timer-reload derivations are comparable.
///
/// # Example
///
/// ```
/// use id_beacon::platform::mock::MockPlatform;
/// use id_beacon::platform::traits::{ChannelBankInterface, Platform};
///
/// let mut platform = MockPlatform::init().unwrap();
/// let mut channels = platform.claim_channels().unwrap();
/// channels.write_all(0xFF).unwrap();
/// platform.tick();
/// assert_eq!(platform.tick_counter().get(), 1);
/// ```
#[derive(Debug)]
pub struct MockPlatform {
    ticks: TickCounter,
    channels_claimed: bool,
    tick_timer_reload: Option<u32>,
}

impl MockPlatform {
    /// Simulated system clock frequency in Hz
    pub const SYSTEM_CLOCK_HZ: u32 = 1_048_576;

    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            ticks: TickCounter::new(),
            channels_claimed: false,
            tick_timer_reload: None,
        }
    }

    /// Fire the simulated tick interrupt once
    pub fn tick(&self) {
        self.ticks.increment();
    }

    /// Fire the simulated tick interrupt `n` times
    pub fn advance_ticks(&self, n: u32) {
        for _ in 0..n {
            self.ticks.increment();
        }
    }

    /// Reload value the tick timer was armed with, if armed
    pub fn tick_timer_reload(&self) -> Option<u32> {
        self.tick_timer_reload
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Channels = MockChannelBank;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn system_clock_hz(&self) -> u32 {
        Self::SYSTEM_CLOCK_HZ
    }

    fn claim_channels(&mut self) -> Result<Self::Channels> {
        if self.channels_claimed {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.channels_claimed = true;
        Ok(MockChannelBank::new())
    }

    fn start_tick_timer(&mut self, bit_rate_hz: u32) -> Result<()> {
        if bit_rate_hz == 0 || bit_rate_hz > self.system_clock_hz() {
            return Err(PlatformError::Timer(TimerError::InvalidRate));
        }
        self.tick_timer_reload = Some(self.system_clock_hz() / bit_rate_hz);
        Ok(())
    }

    fn tick_counter(&self) -> &TickCounter {
        &self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_platform_init() {
        let platform = MockPlatform::init().unwrap();
        assert_eq!(platform.system_clock_hz(), 1_048_576);
        assert_eq!(platform.tick_counter().get(), 0);
        assert!(platform.tick_timer_reload().is_none());
    }

    #[test]
    fn test_mock_platform_channels_claimed_once() {
        let mut platform = MockPlatform::new();
        let _channels = platform.claim_channels().unwrap();
        assert_eq!(
            platform.claim_channels().unwrap_err(),
            PlatformError::ResourceUnavailable
        );
    }

    #[test]
    fn test_mock_platform_tick_timer_reload() {
        let mut platform = MockPlatform::new();
        platform.start_tick_timer(1200).unwrap();
        // 1048576 / 1200, the reference timer compare value
        assert_eq!(platform.tick_timer_reload(), Some(873));
    }

    #[test]
    fn test_mock_platform_rejects_bad_rates() {
        let mut platform = MockPlatform::new();
        assert!(platform.start_tick_timer(0).is_err());
        assert!(platform.start_tick_timer(u32::MAX).is_err());
    }

    #[test]
    fn test_mock_platform_tick_advance() {
        let platform = MockPlatform::new();
        platform.tick();
        platform.advance_ticks(9);
        assert_eq!(platform.tick_counter().get(), 10);
    }
}
