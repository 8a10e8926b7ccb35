// Audio module - audio process detection
//
// - hardware: typed property access on the host audio object registry
// - discovery: resolving process objects into process descriptors
// - platform: the host's registry and lookups wired together

pub mod discovery;
pub mod hardware;
pub mod platform;

// Re-export commonly used types for easier imports
pub use discovery::{
    AudioProcessDiscovery, DiscoveryError, ProcessDescriptor, ProcessKind, RunningApplication,
};
pub use hardware::{
    format_osstatus_error, AudioObjectId, HardwareError, HardwareObjects, HardwareRegistry,
    PropertyAddress, PropertyReader, StreamFormat,
};
pub use platform::{system_discovery, SystemDiscovery};
