//! Mock channel bank implementation for testing

use crate::platform::{traits::ChannelBankInterface, Result, NUM_CHANNELS};
use heapless::Vec;

/// Maximum number of writes retained in the history buffer
///
/// Enough for several full broadcast cycles when polling once per tick;
/// once full, further writes still update the current levels but are no
/// longer recorded.
pub const HISTORY_CAPACITY: usize = 8192;

/// Mock channel bank implementation
///
/// Tracks the current level of every channel and a bounded history of all
/// writes for waveform verification.
#[derive(Debug)]
pub struct MockChannelBank {
    levels: [u8; NUM_CHANNELS],
    history: Vec<[u8; NUM_CHANNELS], HISTORY_CAPACITY>,
}

impl MockChannelBank {
    /// Create a new mock bank with all channels low
    pub fn new() -> Self {
        Self {
            levels: [0; NUM_CHANNELS],
            history: Vec::new(),
        }
    }

    /// Current level byte of every channel
    pub fn levels(&self) -> &[u8; NUM_CHANNELS] {
        &self.levels
    }

    /// All recorded writes, oldest first
    pub fn history(&self) -> &[[u8; NUM_CHANNELS]] {
        &self.history
    }

    /// Forget the recorded writes (current levels are kept)
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for MockChannelBank {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelBankInterface for MockChannelBank {
    fn write(&mut self, levels: &[u8; NUM_CHANNELS]) -> Result<()> {
        self.levels = *levels;
        // Recording stops when the buffer is full; the write itself never fails
        let _ = self.history.push(*levels);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_bank_tracks_levels() {
        let mut bank = MockChannelBank::new();
        assert_eq!(bank.levels(), &[0x00; NUM_CHANNELS]);

        bank.write_all(0xFF).unwrap();
        assert_eq!(bank.levels(), &[0xFF; NUM_CHANNELS]);

        let pattern = [0xAA, 0xCC, 0xF0, 0x00, 0xFF, 0x00, 0x00, 0x00];
        bank.write(&pattern).unwrap();
        assert_eq!(bank.levels(), &pattern);
    }

    #[test]
    fn test_mock_bank_records_history() {
        let mut bank = MockChannelBank::new();
        bank.write_all(0x00).unwrap();
        bank.write_all(0xFF).unwrap();
        bank.write_all(0x00).unwrap();

        assert_eq!(bank.history().len(), 3);
        assert_eq!(bank.history()[1], [0xFF; NUM_CHANNELS]);

        bank.clear_history();
        assert!(bank.history().is_empty());
        assert_eq!(bank.levels(), &[0x00; NUM_CHANNELS]);
    }
}
