//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the beacon's two peripheral
//! needs: a bank of output channels and a periodic tick source. All
//! platform-specific code must be isolated to this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "rp2350")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{ChannelBankInterface, Platform, NUM_CHANNELS};
