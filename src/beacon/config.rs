//! Beacon configuration
//!
//! All parameters are fixed before build: the bit rate, the tick counts
//! that shape one frame and the inter-cycle pause, and the 32-bit device
//! identifier. The identifier can be injected per unit at build time via
//! the `BEACON_DEVICE_ID` environment variable (hex); without it the
//! sentinel value meaning "unprovisioned" is used.

use crate::platform::{PlatformError, Result};

/// Reference bit rate of the broadcast signal
pub const BAUD_RATE: u32 = 1200;

/// Ticks per frame: 1 start + 8 data + 1 stop + 14 ticks inter-frame pause
pub const BYTE_DURATION_TICKS: u32 = 24;

/// Ticks from the start of the signature frame until the cycle restarts
/// (~100 ms at 1200 baud)
pub const TX_PAUSE_TICKS: u32 = 128;

/// Sentinel identifier for units that were never provisioned
pub const UNPROVISIONED_DEVICE_ID: u32 = 0xDEAD_BEAF;

/// Minimum ticks a frame needs: start + 8 data + stop
const MIN_BYTE_DURATION_TICKS: u32 = 10;

/// Compile-time beacon parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeaconConfig {
    /// Bit rate the tick timer is armed at
    pub baud_rate: u32,
    /// Offset threshold after which the sequencer advances to the next frame
    pub byte_duration_ticks: u32,
    /// Offset threshold after which an idle sequencer restarts the cycle
    pub tx_pause_ticks: u32,
    /// 32-bit board variant identifier, sent MSB byte first
    pub device_id: u32,
}

impl BeaconConfig {
    /// Reference timing with the given device identifier
    pub const fn new(device_id: u32) -> Self {
        Self {
            baud_rate: BAUD_RATE,
            byte_duration_ticks: BYTE_DURATION_TICKS,
            tx_pause_ticks: TX_PAUSE_TICKS,
            device_id,
        }
    }

    /// Reference timing with the build-time provisioned identifier
    pub const fn provisioned() -> Self {
        Self::new(device_id())
    }

    /// Check the timing parameters for design-time contract violations
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` for a zero bit rate, a frame
    /// too short to carry start + 8 data + stop, or a broadcast pause that
    /// does not outlast a frame (the idle state would never be reachable
    /// before the restart threshold).
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        if self.byte_duration_ticks < MIN_BYTE_DURATION_TICKS {
            return Err(PlatformError::InvalidConfig);
        }
        if self.tx_pause_ticks <= self.byte_duration_ticks {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self::provisioned()
    }
}

/// Device identifier baked in at build time
///
/// Reads `BEACON_DEVICE_ID` (hex, with or without `0x` prefix) from the
/// build environment; a malformed value fails the build. Units built
/// without it broadcast [`UNPROVISIONED_DEVICE_ID`].
pub const fn device_id() -> u32 {
    match option_env!("BEACON_DEVICE_ID") {
        Some(hex) => parse_hex_u32(hex),
        None => UNPROVISIONED_DEVICE_ID,
    }
}

/// Parse a hex literal at const-evaluation time
const fn parse_hex_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        i = 2;
    }
    assert!(i < bytes.len(), "BEACON_DEVICE_ID is empty");
    let mut value: u32 = 0;
    let mut digits = 0;
    while i < bytes.len() {
        let d = match bytes[i] {
            b'0'..=b'9' => bytes[i] - b'0',
            b'a'..=b'f' => bytes[i] - b'a' + 10,
            b'A'..=b'F' => bytes[i] - b'A' + 10,
            _ => panic!("BEACON_DEVICE_ID contains a non-hex character"),
        };
        assert!(digits < 8, "BEACON_DEVICE_ID does not fit in 32 bits");
        value = (value << 4) | d as u32;
        digits += 1;
        i += 1;
    }
    value
}
