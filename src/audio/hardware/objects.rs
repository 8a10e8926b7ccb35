// Named property reads on audio objects
//
// Each operation pairs one property address with its receiver rule. System
// reads (default output device, process list, PID translation) refuse any
// receiver other than the system object before touching the registry.

use tracing::debug;

use super::error::HardwareError;
use super::object_id::AudioObjectId;
use super::property_address::*;
use super::property_reader::{PropertyReader, Qualifier, Result};
use super::registry::HardwareRegistry;
use super::types::StreamFormat;

/// Domain reads over a hardware registry.
#[derive(Debug, Clone)]
pub struct HardwareObjects<R> {
    reader: PropertyReader<R>,
}

impl<R: HardwareRegistry> HardwareObjects<R> {
    pub fn new(registry: R) -> Self {
        Self {
            reader: PropertyReader::new(registry),
        }
    }

    pub fn reader(&self) -> &PropertyReader<R> {
        &self.reader
    }

    fn require_system_object(object: AudioObjectId, address: PropertyAddress) -> Result<()> {
        if object.is_system() {
            Ok(())
        } else {
            Err(HardwareError::NotSystemObject { object, address })
        }
    }

    /// `kAudioHardwarePropertyDefaultSystemOutputDevice`; system object only
    pub fn read_default_system_output_device(
        &self,
        object: AudioObjectId,
    ) -> Result<AudioObjectId> {
        let address = PropertyAddress::global(kAudioHardwarePropertyDefaultSystemOutputDevice);
        Self::require_system_object(object, address)?;
        self.reader.read_value(object, address, None)
    }

    /// `kAudioHardwarePropertyProcessObjectList`; system object only
    pub fn read_process_list(&self, object: AudioObjectId) -> Result<Vec<AudioObjectId>> {
        let address = PropertyAddress::global(kAudioHardwarePropertyProcessObjectList);
        Self::require_system_object(object, address)?;
        self.reader.read_array(object, address)
    }

    /// `kAudioHardwarePropertyTranslatePIDToProcessObject`; system object only.
    ///
    /// A successful read that yields the unknown handle means the PID has no
    /// audio object and is reported as `InvalidProcess`.
    pub fn translate_pid_to_process_object(
        &self,
        object: AudioObjectId,
        pid: i32,
    ) -> Result<AudioObjectId> {
        let address = PropertyAddress::global(kAudioHardwarePropertyTranslatePIDToProcessObject);
        Self::require_system_object(object, address)?;

        let process_object: AudioObjectId =
            self.reader.read_value(object, address, Some(&Qualifier::pid(pid)))?;

        if !process_object.is_valid() {
            return Err(HardwareError::InvalidProcess { pid, address });
        }

        Ok(process_object)
    }

    pub fn default_system_output_device(&self) -> Result<AudioObjectId> {
        self.read_default_system_output_device(AudioObjectId::SYSTEM)
    }

    pub fn process_objects(&self) -> Result<Vec<AudioObjectId>> {
        self.read_process_list(AudioObjectId::SYSTEM)
    }

    pub fn process_object_for_pid(&self, pid: i32) -> Result<AudioObjectId> {
        self.translate_pid_to_process_object(AudioObjectId::SYSTEM, pid)
    }

    /// `kAudioProcessPropertyPID`
    pub fn read_process_pid(&self, object: AudioObjectId) -> Result<i32> {
        self.reader
            .read_value(object, PropertyAddress::global(kAudioProcessPropertyPID), None)
    }

    /// `kAudioProcessPropertyBundleID`, with its transport error intact
    pub fn try_read_process_bundle_id(&self, object: AudioObjectId) -> Result<String> {
        self.reader
            .read_string(object, PropertyAddress::global(kAudioProcessPropertyBundleID))
    }

    /// Bundle ID, with unreadable or empty values treated as absent
    pub fn read_process_bundle_id(&self, object: AudioObjectId) -> Option<String> {
        match self.try_read_process_bundle_id(object) {
            Ok(bundle_id) if bundle_id.is_empty() => None,
            Ok(bundle_id) => Some(bundle_id),
            Err(e) => {
                debug!("No bundle ID for {}: {}", object, e);
                None
            }
        }
    }

    /// `kAudioProcessPropertyIsRunning`, with its transport error intact
    pub fn try_read_process_is_running(&self, object: AudioObjectId) -> Result<bool> {
        self.reader
            .read_bool(object, PropertyAddress::global(kAudioProcessPropertyIsRunning))
    }

    /// Running state; a process whose state can't be read is treated as silent
    pub fn read_process_is_running(&self, object: AudioObjectId) -> bool {
        self.try_read_process_is_running(object).unwrap_or_else(|e| {
            debug!("Running state unavailable for {}: {}", object, e);
            false
        })
    }

    /// `kAudioProcessPropertyIsRunningInput`
    pub fn read_process_is_running_input(&self, object: AudioObjectId) -> Result<bool> {
        self.reader
            .read_bool(object, PropertyAddress::global(kAudioProcessPropertyIsRunningInput))
    }

    /// `kAudioProcessPropertyIsRunningOutput`
    pub fn read_process_is_running_output(&self, object: AudioObjectId) -> Result<bool> {
        self.reader
            .read_bool(object, PropertyAddress::global(kAudioProcessPropertyIsRunningOutput))
    }

    /// `kAudioProcessPropertyDevices`: devices the process is doing I/O on
    pub fn read_process_devices(&self, object: AudioObjectId) -> Result<Vec<AudioObjectId>> {
        self.reader
            .read_array(object, PropertyAddress::global(kAudioProcessPropertyDevices))
    }

    /// `kAudioDevicePropertyDeviceUID`
    pub fn read_device_uid(&self, object: AudioObjectId) -> Result<String> {
        self.reader
            .read_string(object, PropertyAddress::global(kAudioDevicePropertyDeviceUID))
    }

    /// `kAudioTapPropertyFormat`
    pub fn read_stream_format(&self, object: AudioObjectId) -> Result<StreamFormat> {
        self.reader
            .read_value(object, PropertyAddress::global(kAudioTapPropertyFormat), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::hardware::error::{
        kAudioHardwareBadObjectError, kAudioHardwareUnknownPropertyError,
    };
    use crate::audio::hardware::registry::MockHardwareRegistry;

    const PROCESS: AudioObjectId = AudioObjectId::from_raw(120);

    fn untouched_registry() -> MockHardwareRegistry {
        let mut registry = MockHardwareRegistry::new();
        registry.expect_probe_size().never();
        registry.expect_fetch().never();
        registry.expect_decode_text().never();
        registry
    }

    #[test]
    fn test_system_reads_reject_other_receivers() {
        let objects = HardwareObjects::new(untouched_registry());

        for receiver in [PROCESS, AudioObjectId::UNKNOWN] {
            let err = objects.read_default_system_output_device(receiver).unwrap_err();
            assert!(
                matches!(err, HardwareError::NotSystemObject { object, .. } if object == receiver)
            );

            let err = objects.read_process_list(receiver).unwrap_err();
            assert_eq!(
                err.address(),
                PropertyAddress::global(kAudioHardwarePropertyProcessObjectList)
            );

            let err = objects.translate_pid_to_process_object(receiver, 501).unwrap_err();
            assert!(matches!(err, HardwareError::NotSystemObject { .. }));
        }
    }

    #[test]
    fn test_translate_pid_unknown_result_is_invalid_process() {
        let mut registry = MockHardwareRegistry::new();
        registry.expect_probe_size().returning(|_, _, _| Ok(4));
        registry.expect_fetch().returning(|_, _, _, buffer| {
            buffer.copy_from_slice(&0u32.to_ne_bytes());
            Ok(4)
        });

        let objects = HardwareObjects::new(registry);
        let err = objects.process_object_for_pid(4321).unwrap_err();
        assert_eq!(
            err,
            HardwareError::InvalidProcess {
                pid: 4321,
                address: PropertyAddress::global(kAudioHardwarePropertyTranslatePIDToProcessObject),
            }
        );
    }

    #[test]
    fn test_translate_pid_transport_failure_stays_distinct() {
        let mut registry = MockHardwareRegistry::new();
        registry
            .expect_probe_size()
            .returning(|_, _, _| Err(kAudioHardwareUnknownPropertyError));
        registry.expect_fetch().never();

        let objects = HardwareObjects::new(registry);
        let err = objects.process_object_for_pid(4321).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_running_state_failure_reads_as_silent() {
        let mut registry = MockHardwareRegistry::new();
        registry
            .expect_probe_size()
            .times(1)
            .returning(|_, _, _| Err(kAudioHardwareBadObjectError));
        registry.expect_fetch().never();

        let objects = HardwareObjects::new(registry);
        assert!(!objects.read_process_is_running(PROCESS));
    }

    #[test]
    fn test_empty_bundle_id_is_absent() {
        let mut registry = MockHardwareRegistry::new();
        registry.expect_probe_size().returning(|_, _, _| Ok(8));
        registry.expect_fetch().returning(|_, _, _, buffer| Ok(buffer.len()));
        registry
            .expect_decode_text()
            .returning(|_| Some(String::new()));

        let objects = HardwareObjects::new(registry);
        assert_eq!(objects.read_process_bundle_id(PROCESS), None);
        assert_eq!(objects.try_read_process_bundle_id(PROCESS).unwrap(), "");
    }
}
