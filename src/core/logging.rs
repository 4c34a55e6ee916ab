//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (rp2350): Uses defmt
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! Logging is reserved for initialization and configuration boundaries;
//! nothing in the per-tick hot path logs.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}
