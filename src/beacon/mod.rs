//! Beacon core
//!
//! The signal-generation engine: the shared tick counter, the channel
//! signature table, the frame output driver, and the broadcast sequencer.
//! The environment owns the forever-loop that calls [`Sequencer::poll`]
//! once per iteration.

pub mod config;
pub mod frame;
pub mod sequencer;
pub mod signature;
pub mod tick;

// Re-export commonly used types
pub use config::BeaconConfig;
pub use sequencer::Sequencer;
pub use tick::TickCounter;
