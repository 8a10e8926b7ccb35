// Core Audio object registry
//
// The HardwareRegistry backed by AudioObjectGetPropertyDataSize and
// AudioObjectGetPropertyData. Both calls block until coreaudiod answers.

use std::os::raw::c_void;
use std::ptr;

use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use coreaudio_sys::{
    AudioObjectGetPropertyData, AudioObjectGetPropertyDataSize, AudioObjectPropertyAddress,
};

use crate::audio::hardware::error::{kAudioHardwareNoError, OSStatus};
use crate::audio::hardware::{AudioObjectId, HardwareRegistry, PropertyAddress};

fn to_sys_address(address: PropertyAddress) -> AudioObjectPropertyAddress {
    AudioObjectPropertyAddress {
        mSelector: address.selector,
        mScope: address.scope,
        mElement: address.element,
    }
}

fn qualifier_parts(qualifier: &[u8]) -> (u32, *const c_void) {
    if qualifier.is_empty() {
        (0, ptr::null())
    } else {
        (qualifier.len() as u32, qualifier.as_ptr() as *const c_void)
    }
}

/// The host's audio object registry
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreAudioRegistry;

impl HardwareRegistry for CoreAudioRegistry {
    fn probe_size(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
    ) -> Result<u32, OSStatus> {
        let address = to_sys_address(address);
        let (qualifier_size, qualifier_data) = qualifier_parts(qualifier);
        let mut data_size: u32 = 0;

        let status = unsafe {
            AudioObjectGetPropertyDataSize(
                object.raw(),
                &address as *const _,
                qualifier_size,
                qualifier_data,
                &mut data_size as *mut _,
            )
        };

        if status == kAudioHardwareNoError {
            Ok(data_size)
        } else {
            Err(status)
        }
    }

    fn fetch(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, OSStatus> {
        let address = to_sys_address(address);
        let (qualifier_size, qualifier_data) = qualifier_parts(qualifier);
        let mut data_size = buffer.len() as u32;

        let status = unsafe {
            AudioObjectGetPropertyData(
                object.raw(),
                &address as *const _,
                qualifier_size,
                qualifier_data,
                &mut data_size as *mut _,
                buffer.as_mut_ptr() as *mut c_void,
            )
        };

        if status == kAudioHardwareNoError {
            Ok(data_size as usize)
        } else {
            Err(status)
        }
    }

    /// The buffer holds a `CFStringRef` that the caller owns (create rule).
    fn decode_text(&self, raw: &[u8]) -> Option<String> {
        const POINTER_SIZE: usize = std::mem::size_of::<usize>();
        if raw.len() < POINTER_SIZE {
            return None;
        }

        let mut pointer = [0u8; POINTER_SIZE];
        pointer.copy_from_slice(&raw[..POINTER_SIZE]);
        let string_ref = usize::from_ne_bytes(pointer) as CFStringRef;
        if string_ref.is_null() {
            return None;
        }

        let string = unsafe { CFString::wrap_under_create_rule(string_ref) };
        Some(string.to_string())
    }
}
