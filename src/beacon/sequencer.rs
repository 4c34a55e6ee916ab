//! Broadcast sequencer
//!
//! Owns the per-cycle state: which frame of the cycle is on the wire, the
//! current payload byte, and the tick at which the current frame began.
//! Every poll renders the current bit; transitions are purely time-based
//! (the bit-transmission offset crossing a threshold), never event- or
//! ack-based — this is an open-loop broadcaster with no receiver handshake.

use crate::beacon::config::BeaconConfig;
use crate::beacon::frame;
use crate::beacon::tick::TickCounter;
use crate::platform::{ChannelBankInterface, Result};

/// Identifier frames per cycle (one per device-id byte, MSB byte first)
pub const IDENTIFIER_FRAMES: u8 = 4;

/// Frames per cycle: four identifier frames plus the signature frame
pub const FRAMES_PER_CYCLE: u8 = IDENTIFIER_FRAMES + 1;

/// Broadcast sequencer state machine
///
/// `frame_index` counts down across one cycle: `4..=1` are the identifier
/// frames, `0` is the signature frame followed by the idle pause. The
/// restart value `5` is transient — the first poll after a restart
/// immediately advances to frame 4 and loads the identifier's MSB.
///
/// There is exactly one instance, owned by the polling loop; the tick
/// counter is the only datum shared with interrupt context.
pub struct Sequencer<'a> {
    config: BeaconConfig,
    ticks: &'a TickCounter,
    frame_index: u8,
    data: u8,
    tick_base: u32,
}

impl<'a> Sequencer<'a> {
    /// Create a sequencer over the shared tick counter
    ///
    /// The machine boots into the signature frame, exactly as a device
    /// coming out of reset with zeroed state does; the first full cycle
    /// begins after the initial broadcast pause elapses.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` for degenerate timing
    /// parameters (see [`BeaconConfig::validate`]).
    pub fn new(config: BeaconConfig, ticks: &'a TickCounter) -> Result<Self> {
        config.validate()?;
        crate::log_info!("beacon: sequencer ready, device id {}", config.device_id);
        Ok(Self {
            config,
            ticks,
            frame_index: 0,
            data: 0,
            tick_base: ticks.get(),
        })
    }

    /// Frame currently on the wire (`0` = signature frame / idle)
    pub fn frame_index(&self) -> u8 {
        self.frame_index
    }

    /// Payload byte currently being shifted out (unused in frame 0)
    pub fn payload(&self) -> u8 {
        self.data
    }

    /// Render the current bit and advance the state machine when due
    ///
    /// Call from the polling loop at least once per tick; the loop must
    /// never stall longer than one tick period. Each call:
    ///
    /// 1. Renders the output level of every channel for the current offset.
    /// 2. Once the offset exceeds the byte duration, advances to the next
    ///    frame, loads its payload, and emits its start bit.
    /// 3. Once an idle signature frame's offset exceeds the broadcast
    ///    pause, restarts the cycle.
    ///
    /// # Errors
    ///
    /// Propagates channel bank write failures; the state machine itself
    /// has no failure path.
    pub fn poll<C: ChannelBankInterface>(&mut self, channels: &mut C) -> Result<()> {
        let now = self.ticks.get();
        let offset = now.wrapping_sub(self.tick_base);

        frame::render(channels, self.frame_index == 0, offset, self.data)?;

        if offset > self.config.byte_duration_ticks && self.frame_index > 0 {
            self.frame_index -= 1;
            self.data = if self.frame_index > 0 {
                // Identifier bytes go out MSB first: frame 4 carries
                // bits 31..24 down to frame 1 carrying bits 7..0
                (self.config.device_id >> ((self.frame_index - 1) * 8)) as u8
            } else {
                // Signature frame: each channel drives its own pattern,
                // the payload is unused
                0
            };
            self.tick_base = now;
            // The tight loop would re-render within this same tick anyway;
            // emit the new frame's start bit without waiting for the next poll
            frame::render(channels, self.frame_index == 0, 0, self.data)?;
        } else if offset > self.config.tx_pause_ticks && self.frame_index == 0 {
            // Pause elapsed, measured from the start of the signature
            // frame's transmission. The offset is left running so the next
            // poll's byte-advance branch starts the cycle immediately.
            self.frame_index = FRAMES_PER_CYCLE;
            crate::log_debug!("beacon: cycle restart");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beacon::frame::{LEVEL_HIGH, LEVEL_LOW};
    use crate::beacon::signature::signature_column;
    use crate::platform::mock::MockChannelBank;
    use crate::platform::NUM_CHANNELS;

    const DEVICE_ID: u32 = 0x1234_5678;

    fn sequencer(ticks: &TickCounter, device_id: u32) -> Sequencer<'_> {
        Sequencer::new(BeaconConfig::new(device_id), ticks).unwrap()
    }

    /// Poll once per tick value in `0..n` and record the sampled levels
    fn sample_ticks(
        seq: &mut Sequencer<'_>,
        channels: &mut MockChannelBank,
        ticks: &TickCounter,
        n: u32,
    ) -> Vec<[u8; NUM_CHANNELS]> {
        let mut samples = Vec::new();
        for _ in 0..n {
            seq.poll(channels).unwrap();
            samples.push(*channels.levels());
            ticks.increment();
        }
        samples
    }

    #[test]
    fn test_rejects_invalid_config() {
        let ticks = TickCounter::new();
        let config = BeaconConfig {
            tx_pause_ticks: 0,
            ..BeaconConfig::new(0)
        };
        assert!(Sequencer::new(config, &ticks).is_err());
    }

    #[test]
    fn test_boots_into_signature_frame() {
        let ticks = TickCounter::new();
        let mut channels = MockChannelBank::new();
        let mut seq = sequencer(&ticks, DEVICE_ID);
        assert_eq!(seq.frame_index(), 0);

        let samples = sample_ticks(&mut seq, &mut channels, &ticks, 10);
        // Start bit, then the eight signature columns, then stop
        assert_eq!(samples[0], [LEVEL_LOW; NUM_CHANNELS]);
        for bit in 0..8 {
            assert_eq!(samples[1 + bit], signature_column(bit));
        }
        assert_eq!(samples[9], [LEVEL_HIGH; NUM_CHANNELS]);
    }

    #[test]
    fn test_payload_sequence_msb_byte_first() {
        let ticks = TickCounter::new();
        let mut channels = MockChannelBank::new();
        let mut seq = sequencer(&ticks, DEVICE_ID);

        let mut transitions = Vec::new();
        let mut last = seq.frame_index();
        for _ in 0..600 {
            seq.poll(&mut channels).unwrap();
            if seq.frame_index() != last {
                transitions.push((seq.frame_index(), seq.payload()));
                last = seq.frame_index();
            }
            ticks.increment();
        }

        // Restart is transient (payload untouched), then the four
        // identifier bytes MSB first, then the signature frame
        let expected_cycle = [
            (5, 0x00),
            (4, 0x12),
            (3, 0x34),
            (2, 0x56),
            (1, 0x78),
            (0, 0x00),
        ];
        assert!(transitions.len() >= 2 * expected_cycle.len());
        for (i, &(frame, payload)) in transitions.iter().enumerate() {
            let (exp_frame, exp_payload) = expected_cycle[i % expected_cycle.len()];
            assert_eq!(frame, exp_frame, "transition {}", i);
            if frame != FRAMES_PER_CYCLE {
                assert_eq!(payload, exp_payload, "transition {}", i);
            }
        }
    }

    #[test]
    fn test_frame_cadence_and_pause() {
        let ticks = TickCounter::new();
        let mut channels = MockChannelBank::new();
        let mut seq = sequencer(&ticks, DEVICE_ID);

        // Record the tick at which each identifier frame begins
        let mut starts = Vec::new();
        let mut last = seq.frame_index();
        for t in 0u32..600 {
            seq.poll(&mut channels).unwrap();
            if seq.frame_index() != last {
                last = seq.frame_index();
                if (1..=4).contains(&last) || last == 0 {
                    starts.push((last, t));
                }
            }
            ticks.increment();
        }

        // Boot signature frame at tick 0, restart threshold crossed at 129,
        // first identifier frame begins at tick 130
        assert_eq!(starts[0], (4, 130));
        // Each subsequent frame begins byte_duration + 1 ticks later
        assert_eq!(starts[1], (3, 155));
        assert_eq!(starts[2], (2, 180));
        assert_eq!(starts[3], (1, 205));
        assert_eq!(starts[4], (0, 230));
        // Next cycle: pause measured from the signature frame start
        assert_eq!(starts[5], (4, 360));
    }

    #[test]
    fn test_cycles_are_idempotent() {
        let ticks = TickCounter::new();
        let mut channels = MockChannelBank::new();
        let mut seq = sequencer(&ticks, DEVICE_ID);

        let samples = sample_ticks(&mut seq, &mut channels, &ticks, 820);
        // Steady-state cycle period: 5 frames of 25 ticks + pause remainder
        let period = 230usize;
        let (first, second) = (&samples[130..130 + period], &samples[360..360 + period]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_identifier_drives_data_bits_low() {
        let ticks = TickCounter::new();
        let mut channels = MockChannelBank::new();
        let mut seq = sequencer(&ticks, 0x0000_0000);

        let samples = sample_ticks(&mut seq, &mut channels, &ticks, 400);
        // First identifier frame starts at tick 130 (see cadence test)
        for frame in 0..4usize {
            let base = 130 + frame * 25;
            assert_eq!(samples[base], [LEVEL_LOW; NUM_CHANNELS], "start bit");
            for bit in 1..=8 {
                assert_eq!(
                    samples[base + bit],
                    [LEVEL_LOW; NUM_CHANNELS],
                    "data bit {} of frame {}",
                    bit,
                    frame
                );
            }
            for rest in 9..25 {
                assert_eq!(samples[base + rest], [LEVEL_HIGH; NUM_CHANNELS]);
            }
        }
    }

    #[test]
    fn test_signature_frame_follows_table_mid_cycle() {
        let ticks = TickCounter::new();
        let mut channels = MockChannelBank::new();
        let mut seq = sequencer(&ticks, DEVICE_ID);

        let samples = sample_ticks(&mut seq, &mut channels, &ticks, 400);
        // Signature frame of the first full cycle starts at tick 230
        assert_eq!(samples[230], [LEVEL_LOW; NUM_CHANNELS]);
        for bit in 0..8 {
            assert_eq!(samples[231 + bit], signature_column(bit));
        }
        assert_eq!(samples[239], [LEVEL_HIGH; NUM_CHANNELS]);
    }
}
