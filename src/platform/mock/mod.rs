//! Mock platform implementation for hardware-free testing

mod channels;
mod platform;

pub use channels::{MockChannelBank, HISTORY_CAPACITY};
pub use platform::MockPlatform;
