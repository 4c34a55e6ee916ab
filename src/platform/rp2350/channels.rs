//! RP2350 channel bank implementation
//!
//! This module drives the beacon's output channels through `rp235x-hal`
//! GPIO pins. Pin-constrained boards expose one pin per channel rather
//! than a full 8-pin port; each pin carries its channel's lane-0 level,
//! which behaves exactly like pin 0 of a full port group (pin-position
//! code 0 during the signature marker).

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{ChannelBankInterface, NUM_CHANNELS},
    Result,
};
use rp235x_hal::gpio::{DynPinId, FunctionSioOutput, Pin, PullDown};

/// One output pin per beacon channel
type ChannelPin = Pin<DynPinId, FunctionSioOutput, PullDown>;

/// RP2350 channel bank implementation
///
/// Wraps eight `rp235x-hal` output pins to implement the
/// `ChannelBankInterface` trait.
pub struct Rp2350ChannelBank {
    pins: [ChannelPin; NUM_CHANNELS],
}

impl Rp2350ChannelBank {
    /// Create a bank from eight configured output pins
    ///
    /// The pins must already be push-pull outputs; `Platform::init`
    /// configures all eight before handing them over.
    pub fn new(pins: [ChannelPin; NUM_CHANNELS]) -> Self {
        Self { pins }
    }
}

impl ChannelBankInterface for Rp2350ChannelBank {
    fn write(&mut self, levels: &[u8; NUM_CHANNELS]) -> Result<()> {
        use embedded_hal::digital::v2::OutputPin;
        for (pin, &level) in self.pins.iter_mut().zip(levels.iter()) {
            let result = if level & 1 == 1 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(|_| PlatformError::Gpio(GpioError::HardwareError))?;
        }
        Ok(())
    }
}
