//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod channels;
pub mod platform;

// Re-export trait interfaces
pub use channels::{ChannelBankInterface, NUM_CHANNELS};
pub use platform::Platform;
