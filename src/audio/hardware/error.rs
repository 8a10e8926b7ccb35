// Hardware property access errors
//
// Every variant carries the address that failed. Transport failures also
// carry the host status code so callers can log something actionable.

#![allow(non_upper_case_globals)]

use super::object_id::AudioObjectId;
use super::property_address::{four_char_string, PropertyAddress};

/// Core Audio status code, `0` on success
pub type OSStatus = i32;

pub const kAudioHardwareNoError: OSStatus = 0;
pub const kAudioHardwareNotRunningError: OSStatus = 1937010544; // 'stop'
pub const kAudioHardwareUnspecifiedError: OSStatus = 2003329396; // 'what'
pub const kAudioHardwareUnknownPropertyError: OSStatus = 2003332927; // 'who?'
pub const kAudioHardwareBadPropertySizeError: OSStatus = 561211770; // '!siz'
pub const kAudioHardwareIllegalOperationError: OSStatus = 1852797029; // 'nope'
pub const kAudioHardwareBadObjectError: OSStatus = 560947818; // '!obj'
pub const kAudioHardwareBadDeviceError: OSStatus = 560227702; // '!dev'
pub const kAudioHardwareUnsupportedOperationError: OSStatus = 1970171760; // 'unop'

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HardwareError {
    /// The size probe failed: the object doesn't expose the property, or the handle is stale
    #[error("Property {address} unavailable on object {object}: {}", format_osstatus_error(*.status))]
    PropertyUnavailable {
        object: AudioObjectId,
        address: PropertyAddress,
        status: OSStatus,
    },

    /// The size probe succeeded but the fetch did not
    #[error("Failed to read property {address} on object {object}: {}", format_osstatus_error(*.status))]
    PropertyReadFailed {
        object: AudioObjectId,
        address: PropertyAddress,
        status: OSStatus,
    },

    #[error("Property {address} is only supported on the system object (got {object})")]
    NotSystemObject {
        object: AudioObjectId,
        address: PropertyAddress,
    },

    /// PID translation succeeded but yielded the unknown sentinel
    #[error("Invalid process identifier: {pid} ({address})")]
    InvalidProcess { pid: i32, address: PropertyAddress },
}

impl HardwareError {
    pub fn address(&self) -> PropertyAddress {
        match self {
            Self::PropertyUnavailable { address, .. }
            | Self::PropertyReadFailed { address, .. }
            | Self::NotSystemObject { address, .. }
            | Self::InvalidProcess { address, .. } => *address,
        }
    }

    /// Host status code; `None` when no registry call failed
    pub fn status(&self) -> Option<OSStatus> {
        match self {
            Self::PropertyUnavailable { status, .. } | Self::PropertyReadFailed { status, .. } => {
                Some(*status)
            }
            Self::NotSystemObject { .. } | Self::InvalidProcess { .. } => None,
        }
    }

    /// `true` when the object simply doesn't expose the property
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::PropertyUnavailable { .. })
    }
}

/// Convert OSStatus error codes to human-readable messages
pub fn format_osstatus_error(status: OSStatus) -> String {
    match status {
        kAudioHardwareNoError => "No error".to_string(),
        kAudioHardwareNotRunningError => "Audio hardware not running".to_string(),
        kAudioHardwareUnspecifiedError => "Audio hardware unspecified error".to_string(),
        kAudioHardwareUnknownPropertyError => "Audio hardware unknown property".to_string(),
        kAudioHardwareBadPropertySizeError => "Bad property size".to_string(),
        kAudioHardwareIllegalOperationError => "Illegal operation".to_string(),
        kAudioHardwareBadObjectError => "Bad audio object".to_string(),
        kAudioHardwareBadDeviceError => "Bad audio device".to_string(),
        kAudioHardwareUnsupportedOperationError => "Unsupported operation".to_string(),
        -50 => "Parameter error".to_string(),
        -4 => "Unimplemented error".to_string(),
        _ if status > 0 && !four_char_string(status as u32).starts_with("0x") => {
            format!("OSStatus '{}' ({})", four_char_string(status as u32), status)
        }
        _ => format!("Unknown OSStatus error: {}", status),
    }
}
