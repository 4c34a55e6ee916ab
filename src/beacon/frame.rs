//! Frame output driver
//!
//! Maps the position within the current frame (the bit-transmission offset)
//! to the output level of every channel and applies it. One state machine
//! serves both payload semantics: ordinary frames broadcast the same data
//! bit on every channel, the signature frame substitutes each channel's own
//! table row. Reusing the start/stop timing for both avoids a second
//! framing protocol.

use crate::beacon::signature::signature_column;
use crate::platform::{ChannelBankInterface, Result};

/// Data bits per frame
pub const DATA_BITS: u32 = 8;

/// All pins of a channel low
pub const LEVEL_LOW: u8 = 0x00;

/// All pins of a channel high
pub const LEVEL_HIGH: u8 = 0xFF;

/// Drive every channel for one instant of the current frame
///
/// * `offset == 0` — start bit, every channel low.
/// * `1..=8` — data bits, LSB first. Ordinary frames (`signature_frame`
///   false) drive every channel to bit `offset - 1` of `data`; the
///   signature frame ignores `data` and drives channel `c` to its own
///   table column.
/// * `offset > 8` — stop bit and idle, every channel high.
///
/// Every call writes all channels unconditionally.
///
/// # Errors
///
/// Propagates channel bank write failures.
pub fn render<C: ChannelBankInterface>(
    channels: &mut C,
    signature_frame: bool,
    offset: u32,
    data: u8,
) -> Result<()> {
    if offset == 0 {
        // Start bit
        channels.write_all(LEVEL_LOW)
    } else if offset <= DATA_BITS {
        let bit = (offset - 1) as u8;
        if signature_frame {
            channels.write(&signature_column(bit as usize))
        } else if (data >> bit) & 1 == 1 {
            channels.write_all(LEVEL_HIGH)
        } else {
            channels.write_all(LEVEL_LOW)
        }
    } else {
        // Stop bit and idle-high line
        channels.write_all(LEVEL_HIGH)
    }
}
