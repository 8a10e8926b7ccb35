// Generic two-phase property reads
//
// Every read probes the property's byte size, allocates exactly that much,
// fetches, then decodes. The decode strategy is picked by the caller through a
// shape type (scalar, array, text, flag); the reader itself never inspects
// the value. Failures are surfaced as-is: there are no retries here.

use std::marker::PhantomData;

use super::error::HardwareError;
use super::object_id::AudioObjectId;
use super::property_address::PropertyAddress;
use super::registry::HardwareRegistry;
use super::types::{to_bytes, PlainValue};

pub type Result<T> = std::result::Result<T, HardwareError>;

/// Extra fixed-size input that narrows a query, e.g. the PID for PID translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier(Vec<u8>);

impl Qualifier {
    pub fn new<T: PlainValue>(value: T) -> Self {
        Self(to_bytes(value))
    }

    pub fn pid(pid: i32) -> Self {
        Self::new(pid)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Decode strategy for one kind of property value.
pub trait PropertyShape {
    type Output;

    /// Buffer handed to the fetch, exactly `size` bytes
    fn prepare(size: usize) -> Vec<u8> {
        vec![0u8; size]
    }

    fn decode<R: HardwareRegistry + ?Sized>(registry: &R, raw: &[u8]) -> Self::Output;
}

/// A single fixed-size value.
pub struct Scalar<T>(PhantomData<T>);

impl<T: PlainValue> PropertyShape for Scalar<T> {
    type Output = T;

    fn prepare(size: usize) -> Vec<u8> {
        let mut buffer = vec![0u8; size];
        let unset = to_bytes(T::unset());
        let prefix = size.min(T::SIZE);
        buffer[..prefix].copy_from_slice(&unset[..prefix]);
        buffer
    }

    fn decode<R: HardwareRegistry + ?Sized>(_registry: &R, raw: &[u8]) -> T {
        if raw.len() >= T::SIZE {
            return T::read_bytes(&raw[..T::SIZE]);
        }
        // Short value: the tail keeps the unset encoding
        let mut padded = to_bytes(T::unset());
        padded[..raw.len()].copy_from_slice(raw);
        T::read_bytes(&padded)
    }
}

/// A packed array of fixed-size elements; the element count is `size / T::SIZE`.
pub struct ArrayOf<T>(PhantomData<T>);

impl<T: PlainValue> PropertyShape for ArrayOf<T> {
    type Output = Vec<T>;

    fn prepare(size: usize) -> Vec<u8> {
        let count = size / T::SIZE;
        let mut buffer = Vec::with_capacity(size);
        let unset = to_bytes(T::unset());
        for _ in 0..count {
            buffer.extend_from_slice(&unset);
        }
        buffer.resize(size, 0);
        buffer
    }

    fn decode<R: HardwareRegistry + ?Sized>(_registry: &R, raw: &[u8]) -> Vec<T> {
        raw.chunks_exact(T::SIZE).map(T::read_bytes).collect()
    }
}

/// A platform text object (a `CFStringRef` on macOS), converted after the fetch.
pub struct Text;

impl PropertyShape for Text {
    type Output = String;

    fn decode<R: HardwareRegistry + ?Sized>(registry: &R, raw: &[u8]) -> String {
        registry.decode_text(raw).unwrap_or_default()
    }
}

/// A 4-byte integer where exactly `1` means true.
pub struct Flag;

impl PropertyShape for Flag {
    type Output = bool;

    fn prepare(size: usize) -> Vec<u8> {
        Scalar::<u32>::prepare(size)
    }

    fn decode<R: HardwareRegistry + ?Sized>(registry: &R, raw: &[u8]) -> bool {
        decode_flag(Scalar::<u32>::decode(registry, raw))
    }
}

/// Not a general boolean: `2` or `u32::MAX` are false too.
pub fn decode_flag(raw: u32) -> bool {
    raw == 1
}

/// Two-phase typed reads against a registry.
#[derive(Debug, Clone)]
pub struct PropertyReader<R> {
    registry: R,
}

impl<R: HardwareRegistry> PropertyReader<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Probe, allocate, fetch and decode one property value.
    pub fn read<S: PropertyShape>(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: Option<&Qualifier>,
    ) -> Result<S::Output> {
        let qualifier = qualifier.map_or(&[][..], Qualifier::as_bytes);

        let size = self
            .registry
            .probe_size(object, address, qualifier)
            .map_err(|status| HardwareError::PropertyUnavailable {
                object,
                address,
                status,
            })?;

        let mut buffer = S::prepare(size as usize);

        let written = self
            .registry
            .fetch(object, address, qualifier, &mut buffer)
            .map_err(|status| HardwareError::PropertyReadFailed {
                object,
                address,
                status,
            })?;

        crate::scan_debug!(
            "read {} on {}: probed {} bytes, fetched {}",
            address,
            object,
            size,
            written
        );

        Ok(S::decode(&self.registry, &buffer))
    }

    pub fn read_value<T: PlainValue>(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: Option<&Qualifier>,
    ) -> Result<T> {
        self.read::<Scalar<T>>(object, address, qualifier)
    }

    pub fn read_array<T: PlainValue>(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
    ) -> Result<Vec<T>> {
        self.read::<ArrayOf<T>>(object, address, None)
    }

    pub fn read_string(&self, object: AudioObjectId, address: PropertyAddress) -> Result<String> {
        self.read::<Text>(object, address, None)
    }

    pub fn read_bool(&self, object: AudioObjectId, address: PropertyAddress) -> Result<bool> {
        self.read::<Flag>(object, address, None)
    }
}
