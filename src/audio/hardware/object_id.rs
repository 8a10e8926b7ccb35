// Audio object handles
//
// Every entity in the host audio registry (devices, process objects, the
// system object itself) is addressed by a 32-bit id. Two values are reserved:
// the unknown sentinel and the system object.

use std::fmt;

/// Opaque handle to an object in the host audio registry.
///
/// Handles are capability tokens: the registry can destroy the referenced
/// object at any moment, so a valid handle may still be stale by the time it
/// is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AudioObjectId(u32);

impl AudioObjectId {
    /// `kAudioObjectUnknown`
    pub const UNKNOWN: Self = Self(0);

    /// `kAudioObjectSystemObject`, the only receiver for root-scoped queries
    pub const SYSTEM: Self = Self(1);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// `false` only for the unknown sentinel
    pub fn is_valid(self) -> bool {
        !self.is_unknown()
    }

    pub fn is_system(self) -> bool {
        self == Self::SYSTEM
    }
}

impl Default for AudioObjectId {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for AudioObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UNKNOWN => f.write_str("unknown"),
            Self::SYSTEM => f.write_str("system"),
            Self(raw) => write!(f, "#{}", raw),
        }
    }
}
