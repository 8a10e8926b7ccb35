pub mod audio;
pub mod config;
pub mod log;
pub mod monitor;

use anyhow::{Context, Result};
use tracing::{info, warn};

// Re-export audio types for testing and external use
pub use audio::{
    AudioObjectId, AudioProcessDiscovery, DiscoveryError, HardwareError, HardwareObjects,
    HardwareRegistry, ProcessDescriptor, ProcessKind, PropertyAddress, PropertyReader,
};
pub use config::{MonitorConfig, ReportMode};
pub use monitor::{ActiveProcessSource, MonitorStats, ProcessMonitor};

/// Binary entry point: configure, then scan until Ctrl-C.
pub fn run() -> Result<()> {
    let config = MonitorConfig::from_env().context("loading configuration")?;

    log::init_tracing(&config.log_filter);
    if config.scan_debug {
        log::set_scan_debug(true);
    }

    let discovery = audio::system_discovery(config.bundle_search_depth)
        .context("initializing audio process discovery")?;

    match discovery.default_output_device_uid() {
        Ok(uid) => info!("Default system output device: {}", uid),
        Err(e) => warn!("Default system output device unavailable: {}", e),
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building runtime")?;

    info!("Starting process monitor...");
    let stats = runtime.block_on(async { ProcessMonitor::new(discovery, config).run().await })?;
    info!("Completed {} scan passes", stats.passes);

    Ok(())
}
