// Property addresses and the selector/scope/element codes we query
//
// Core Audio names every property with three four-char codes. The constants
// below are the subset this crate reads; the values match AudioHardware.h.

#![allow(non_upper_case_globals)]

use std::fmt;

/// Packs a four-character code into its big-endian `u32` form.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    ((code[0] as u32) << 24) | ((code[1] as u32) << 16) | ((code[2] as u32) << 8) | code[3] as u32
}

// Scopes and elements
pub const kAudioObjectPropertyScopeGlobal: u32 = fourcc(b"glob");
pub const kAudioObjectPropertyScopeInput: u32 = fourcc(b"inpt");
pub const kAudioObjectPropertyScopeOutput: u32 = fourcc(b"outp");
pub const kAudioObjectPropertyElementMain: u32 = 0;

// System object properties
pub const kAudioHardwarePropertyDefaultSystemOutputDevice: u32 = fourcc(b"sOut");
pub const kAudioHardwarePropertyProcessObjectList: u32 = fourcc(b"prs#");
pub const kAudioHardwarePropertyTranslatePIDToProcessObject: u32 = fourcc(b"id2p");

// Process object properties
pub const kAudioProcessPropertyPID: u32 = fourcc(b"ppid");
pub const kAudioProcessPropertyBundleID: u32 = fourcc(b"pbid");
pub const kAudioProcessPropertyDevices: u32 = fourcc(b"pdv#");
pub const kAudioProcessPropertyIsRunning: u32 = fourcc(b"pir?");
pub const kAudioProcessPropertyIsRunningInput: u32 = fourcc(b"piri");
pub const kAudioProcessPropertyIsRunningOutput: u32 = fourcc(b"piro");

// Device and tap properties
pub const kAudioDevicePropertyDeviceUID: u32 = fourcc(b"uid ");
pub const kAudioTapPropertyFormat: u32 = fourcc(b"tfmt");

/// Identifies one readable property on one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyAddress {
    pub selector: u32,
    pub scope: u32,
    pub element: u32,
}

impl PropertyAddress {
    /// Global scope, main element
    pub const fn global(selector: u32) -> Self {
        Self {
            selector,
            scope: kAudioObjectPropertyScopeGlobal,
            element: kAudioObjectPropertyElementMain,
        }
    }

    pub const fn with_scope(self, scope: u32) -> Self {
        Self { scope, ..self }
    }

    pub const fn with_element(self, element: u32) -> Self {
        Self { element, ..self }
    }
}

/// Renders a code as its four printable characters, or hex when any byte isn't printable.
pub fn four_char_string(code: u32) -> String {
    let bytes = code.to_be_bytes();
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        bytes.iter().map(|&b| b as char).collect()
    } else {
        format!("{:#010x}", code)
    }
}

impl fmt::Display for PropertyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let element = if self.element == kAudioObjectPropertyElementMain {
            "main".to_string()
        } else {
            four_char_string(self.element)
        };
        write!(
            f,
            "{}/{}/{}",
            four_char_string(self.selector),
            four_char_string(self.scope),
            element
        )
    }
}
