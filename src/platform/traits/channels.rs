//! Output channel bank interface trait
//!
//! This module defines the channel bank interface that platform
//! implementations must provide. A channel is one physical output group
//! (e.g. a GPIO port) whose eight pins are driven together; the beacon sets
//! the level of every channel on every poll.

use crate::platform::Result;

/// Number of output channels driven by the beacon
pub const NUM_CHANNELS: usize = 8;

/// Channel bank interface trait
///
/// Platform implementations must provide this interface for driving the
/// beacon's output channels.
///
/// # Safety Invariants
///
/// - Every channel must be configured as a push-pull output before the
///   first write
/// - Only one owner per channel bank instance
/// - No concurrent access to the bank from multiple contexts
pub trait ChannelBankInterface {
    /// Drive all channels for the current instant
    ///
    /// `levels[c]` holds the pin levels of channel `c` for this bit-time:
    /// bit `p` of the byte is the level of pin `p` within that channel.
    /// Ordinary data frames use `0x00`/`0xFF` (all pins of a channel agree);
    /// the signature frame drives per-channel patterns.
    ///
    /// The write is unconditional and covers every channel; there are no
    /// partial updates.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the underlying pin write fails.
    fn write(&mut self, levels: &[u8; NUM_CHANNELS]) -> Result<()>;

    /// Drive every channel to the same level byte
    ///
    /// Convenience for the start bit (`0x00`) and stop/idle (`0xFF`) phases.
    fn write_all(&mut self, level: u8) -> Result<()> {
        self.write(&[level; NUM_CHANNELS])
    }
}
