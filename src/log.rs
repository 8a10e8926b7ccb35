use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::EnvFilter;

/// Global flag to control per-read scan tracing
pub static SCAN_DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Set scan debug logging on/off
pub fn set_scan_debug(enabled: bool) {
    SCAN_DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
    tracing::info!(
        "🔧 Scan debug logging {}",
        if enabled { "ENABLED" } else { "DISABLED" }
    );
}

/// Check if scan debug logging is enabled
pub fn is_scan_debug_enabled() -> bool {
    SCAN_DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Install the stderr subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (tests, embedding); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Scan debug macro - only traces if scan debug is enabled
#[macro_export]
macro_rules! scan_debug {
    ($($arg:tt)*) => {
        if $crate::log::SCAN_DEBUG_ENABLED.load(std::sync::atomic::Ordering::Relaxed) {
            tracing::debug!(target: "audio_detect::scan", $($arg)*);
        }
    };
}
