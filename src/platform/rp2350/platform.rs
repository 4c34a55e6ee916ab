//! RP2350 Platform implementation

use rp235x_hal::{self as hal, gpio::PinState};

use super::{channels::Rp2350ChannelBank, timer};
use crate::beacon::tick::TickCounter;
use crate::platform::{error::PlatformError, traits::Platform, Result};

/// External crystal frequency on Pico 2 class boards
const XOSC_CRYSTAL_FREQ: u32 = 12_000_000;

/// RP2350 Platform implementation
///
/// `init` satisfies the beacon's start-up contract: the watchdog is only
/// fed into clock setup and never started (nothing resets the board during
/// the broadcast pause), and all eight channel pins come up as push-pull
/// outputs driven high (idle line level).
pub struct Rp2350Platform {
    timer: hal::Timer<hal::timer::CopyableTimer0>,
    channels: Option<Rp2350ChannelBank>,
    system_clock_hz: u32,
}

impl Platform for Rp2350Platform {
    type Channels = Rp2350ChannelBank;

    fn init() -> Result<Self> {
        let mut pac = hal::pac::Peripherals::take().ok_or(PlatformError::InitializationFailed)?;

        let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
        let clocks = hal::clocks::init_clocks_and_plls(
            XOSC_CRYSTAL_FREQ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .map_err(|_| PlatformError::InitializationFailed)?;

        let sio = hal::Sio::new(pac.SIO);
        let pins = hal::gpio::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );
        let timer = hal::Timer::new_timer0(pac.TIMER0, &mut pac.RESETS, &clocks);

        // All eight channels configured as outputs, idle high
        let channel_pins = [
            pins.gpio0
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
            pins.gpio1
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
            pins.gpio2
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
            pins.gpio3
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
            pins.gpio4
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
            pins.gpio5
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
            pins.gpio6
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
            pins.gpio7
                .into_push_pull_output_in_state(PinState::High)
                .into_dyn_pin(),
        ];

        let system_clock_hz = clocks.system_clock.freq().to_Hz();
        crate::log_info!("platform: rp2350 up, system clock {} Hz", system_clock_hz);

        Ok(Self {
            timer,
            channels: Some(Rp2350ChannelBank::new(channel_pins)),
            system_clock_hz,
        })
    }

    fn system_clock_hz(&self) -> u32 {
        self.system_clock_hz
    }

    fn claim_channels(&mut self) -> Result<Self::Channels> {
        self.channels
            .take()
            .ok_or(PlatformError::ResourceUnavailable)
    }

    fn start_tick_timer(&mut self, bit_rate_hz: u32) -> Result<()> {
        timer::start(&mut self.timer, bit_rate_hz)
    }

    fn tick_counter(&self) -> &TickCounter {
        timer::tick_counter()
    }
}
