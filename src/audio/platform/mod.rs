// Host platform wiring
//
// Builds the discovery stack for the current OS. Audio process objects only
// exist on macOS (14.4+); other hosts get an UnsupportedSystem error.

use crate::audio::discovery::{AudioProcessDiscovery, Result, SysinfoProcesses};

#[cfg(target_os = "macos")]
pub mod core_audio;

#[cfg(target_os = "macos")]
pub use core_audio::CoreAudioRegistry;

#[cfg(target_os = "macos")]
use crate::audio::discovery::{ContentTypeClassifier, WorkspaceApplications};

#[cfg(not(target_os = "macos"))]
use crate::audio::discovery::{DiscoveryError, NoApplications, NoBundles};
#[cfg(not(target_os = "macos"))]
use crate::audio::hardware::{AudioObjectId, HardwareRegistry, OSStatus, PropertyAddress};

#[cfg(target_os = "macos")]
pub type SystemDiscovery = AudioProcessDiscovery<
    CoreAudioRegistry,
    WorkspaceApplications,
    SysinfoProcesses,
    ContentTypeClassifier,
>;

#[cfg(not(target_os = "macos"))]
pub type SystemDiscovery =
    AudioProcessDiscovery<UnsupportedRegistry, NoApplications, SysinfoProcesses, NoBundles>;

/// Discovery over the host's own audio registry
#[cfg(target_os = "macos")]
pub fn system_discovery(bundle_search_depth: usize) -> Result<SystemDiscovery> {
    Ok(AudioProcessDiscovery::new(
        CoreAudioRegistry,
        WorkspaceApplications,
        SysinfoProcesses::new(),
        ContentTypeClassifier,
    )
    .with_bundle_search_depth(bundle_search_depth))
}

#[cfg(not(target_os = "macos"))]
pub fn system_discovery(_bundle_search_depth: usize) -> Result<SystemDiscovery> {
    Err(DiscoveryError::UnsupportedSystem)
}

/// Stands in for the registry on hosts without one; it has no values.
#[cfg(not(target_os = "macos"))]
#[derive(Debug)]
pub enum UnsupportedRegistry {}

#[cfg(not(target_os = "macos"))]
impl HardwareRegistry for UnsupportedRegistry {
    fn probe_size(
        &self,
        _: AudioObjectId,
        _: PropertyAddress,
        _: &[u8],
    ) -> std::result::Result<u32, OSStatus> {
        match *self {}
    }

    fn fetch(
        &self,
        _: AudioObjectId,
        _: PropertyAddress,
        _: &[u8],
        _: &mut [u8],
    ) -> std::result::Result<usize, OSStatus> {
        match *self {}
    }

    fn decode_text(&self, _: &[u8]) -> Option<String> {
        match *self {}
    }
}
