// Process discovery type definitions
//
// The resolved view of one audio-capable process, and the records the
// external lookups (running applications, OS process table) hand back.

use std::path::PathBuf;

use crate::audio::hardware::{AudioObjectId, HardwareError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessKind {
    Process,
    Application,
}

/// A process resolved from an audio process object. Built fresh on every scan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessDescriptor {
    pub pid: i32,
    pub kind: ProcessKind,
    pub display_name: String,
    pub audio_active: bool,
    pub bundle_identifier: Option<String>,
    pub bundle_path: Option<PathBuf>,
    pub object_id: AudioObjectId,
}

/// A live entry from the running-application registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningApplication {
    pub localized_name: Option<String>,
    pub bundle_identifier: Option<String>,
    pub bundle_path: Option<PathBuf>,
}

/// Name and executable path from the OS process table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsProcessInfo {
    pub name: String,
    pub executable_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Hardware(#[from] HardwareError),

    #[error("Unsupported system - audio process objects require macOS 14.4+")]
    UnsupportedSystem,
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
