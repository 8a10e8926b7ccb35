// Access to the host audio object registry
//
// The registry is global state owned by the OS. Everything above this trait
// reaches it through an injected implementation so tests can substitute a
// deterministic fake.

use super::error::OSStatus;
use super::object_id::AudioObjectId;
use super::property_address::PropertyAddress;

/// Blocking, two-call property access in the shape of
/// `AudioObjectGetPropertyDataSize` / `AudioObjectGetPropertyData`.
///
/// An empty `qualifier` means no qualifier is passed.
#[cfg_attr(test, mockall::automock)]
pub trait HardwareRegistry {
    /// Byte size needed to hold the property's current value
    fn probe_size(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
    ) -> Result<u32, OSStatus>;

    /// Fills `buffer` with the property's value, returning how many bytes were written
    fn fetch(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, OSStatus>;

    /// Converts a fetched platform text object into a `String`, taking ownership of it
    fn decode_text(&self, raw: &[u8]) -> Option<String>;
}

impl<R: HardwareRegistry + ?Sized> HardwareRegistry for &R {
    fn probe_size(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
    ) -> Result<u32, OSStatus> {
        (**self).probe_size(object, address, qualifier)
    }

    fn fetch(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, OSStatus> {
        (**self).fetch(object, address, qualifier, buffer)
    }

    fn decode_text(&self, raw: &[u8]) -> Option<String> {
        (**self).decode_text(raw)
    }
}

impl<R: HardwareRegistry + ?Sized> HardwareRegistry for Box<R> {
    fn probe_size(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
    ) -> Result<u32, OSStatus> {
        (**self).probe_size(object, address, qualifier)
    }

    fn fetch(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, OSStatus> {
        (**self).fetch(object, address, qualifier, buffer)
    }

    fn decode_text(&self, raw: &[u8]) -> Option<String> {
        (**self).decode_text(raw)
    }
}
