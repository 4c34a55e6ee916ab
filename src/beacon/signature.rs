//! Channel signature table
//!
//! The final frame of every broadcast cycle carries no literal data.
//! Instead, each channel drives its own row of this table, one column per
//! data-bit position, so a prober watching any single pin can work out
//! exactly which channel and pin it is attached to without a synchronized
//! multi-channel capture.
//!
//! Layout of a row (one byte per data-bit position):
//!
//! - Columns 0..=2 are a marker shared by all channels: `0xAA, 0xCC, 0xF0`.
//!   Pin `p` of any channel reads bits `p` of those three bytes, which spell
//!   out `p` itself in binary — the pin-position code.
//! - Column 3 is `0x00` on every channel, separating marker from code.
//! - Columns 4..=7 are `0x00`/`0xFF` whole-channel levels encoding
//!   channel index + 1, least significant bit in column 4.

use crate::platform::NUM_CHANNELS;

/// Data bits per frame (and columns per signature row)
pub const SIGNATURE_BITS: usize = 8;

/// Per-channel signature patterns, row = channel, column = data-bit position
pub const CHANNEL_SIGNATURES: [[u8; SIGNATURE_BITS]; NUM_CHANNELS] = [
    [0xAA, 0xCC, 0xF0, 0x00, 0xFF, 0x00, 0x00, 0x00],
    [0xAA, 0xCC, 0xF0, 0x00, 0x00, 0xFF, 0x00, 0x00],
    [0xAA, 0xCC, 0xF0, 0x00, 0xFF, 0xFF, 0x00, 0x00],
    [0xAA, 0xCC, 0xF0, 0x00, 0x00, 0x00, 0xFF, 0x00],
    [0xAA, 0xCC, 0xF0, 0x00, 0xFF, 0x00, 0xFF, 0x00],
    [0xAA, 0xCC, 0xF0, 0x00, 0x00, 0xFF, 0xFF, 0x00],
    [0xAA, 0xCC, 0xF0, 0x00, 0xFF, 0xFF, 0xFF, 0x00],
    [0xAA, 0xCC, 0xF0, 0x00, 0x00, 0x00, 0x00, 0xFF],
];

/// Levels of all channels for one data-bit position of the signature frame
///
/// Pure lookup; `bit` is the data-bit index 0..=7 (LSB first on the wire).
pub const fn signature_column(bit: usize) -> [u8; NUM_CHANNELS] {
    let mut levels = [0u8; NUM_CHANNELS];
    let mut channel = 0;
    while channel < NUM_CHANNELS {
        levels[channel] = CHANNEL_SIGNATURES[channel][bit];
        channel += 1;
    }
    levels
}
