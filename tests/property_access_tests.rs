mod common;

use audio_detect_lib::audio::hardware::property_address::*;
use audio_detect_lib::audio::hardware::{
    AudioObjectId, HardwareError, HardwareObjects, PropertyAddress, StreamFormat,
};
use common::{kAudioHardwareBadObjectError, kAudioHardwareUnknownPropertyError, FakeRegistry};

const DEVICE: AudioObjectId = AudioObjectId::from_raw(40);
const MUSIC: AudioObjectId = AudioObjectId::from_raw(71);
const SAFARI: AudioObjectId = AudioObjectId::from_raw(72);

/// Tests for the system-object reads
#[cfg(test)]
mod system_object_tests {
    use super::*;

    #[test]
    fn test_default_output_device() {
        let mut registry = FakeRegistry::new();
        registry.set_value(
            AudioObjectId::SYSTEM,
            kAudioHardwarePropertyDefaultSystemOutputDevice,
            DEVICE,
        );
        registry.set_text(DEVICE, kAudioDevicePropertyDeviceUID, "BuiltInSpeakerDevice");

        let objects = HardwareObjects::new(&registry);
        let device = objects.default_system_output_device().unwrap();
        assert_eq!(device, DEVICE);
        assert_eq!(objects.read_device_uid(device).unwrap(), "BuiltInSpeakerDevice");
    }

    #[test]
    fn test_non_system_receivers_never_reach_the_registry() {
        let registry = FakeRegistry::new();
        let objects = HardwareObjects::new(&registry);

        for receiver in [DEVICE, AudioObjectId::UNKNOWN] {
            assert!(matches!(
                objects.read_default_system_output_device(receiver),
                Err(HardwareError::NotSystemObject { .. })
            ));
            assert!(matches!(
                objects.read_process_list(receiver),
                Err(HardwareError::NotSystemObject { .. })
            ));
            assert!(matches!(
                objects.translate_pid_to_process_object(receiver, 99),
                Err(HardwareError::NotSystemObject { .. })
            ));
        }

        assert_eq!(registry.calls(), 0);
    }

    #[test]
    fn test_process_list() {
        let mut registry = FakeRegistry::new();
        registry.set_process_list(&[MUSIC, SAFARI]);

        let objects = HardwareObjects::new(&registry);
        assert_eq!(objects.process_objects().unwrap(), vec![MUSIC, SAFARI]);
    }

    #[test]
    fn test_empty_process_list() {
        let mut registry = FakeRegistry::new();
        registry.set_process_list(&[]);

        let objects = HardwareObjects::new(&registry);
        assert!(objects.process_objects().unwrap().is_empty());
        assert_eq!(registry.fetch_calls.get(), 1);
    }

    #[test]
    fn test_pid_translation() {
        let mut registry = FakeRegistry::new();
        registry.add_process(MUSIC, 812, true, Some("com.apple.Music"));

        let objects = HardwareObjects::new(&registry);
        assert_eq!(objects.process_object_for_pid(812).unwrap(), MUSIC);
    }

    #[test]
    fn test_pid_without_audio_object_is_invalid_process() {
        let registry = FakeRegistry::new();
        let objects = HardwareObjects::new(&registry);

        let err = objects.process_object_for_pid(4321).unwrap_err();
        assert!(matches!(err, HardwareError::InvalidProcess { pid: 4321, .. }));
        assert_eq!(
            err.address(),
            PropertyAddress::global(kAudioHardwarePropertyTranslatePIDToProcessObject)
        );
        // Both phases ran and succeeded; the sentinel is a domain error
        assert_eq!(registry.probe_calls.get(), 1);
        assert_eq!(registry.fetch_calls.get(), 1);
    }
}

/// Tests for per-process and per-device reads
#[cfg(test)]
mod object_property_tests {
    use super::*;

    #[test]
    fn test_probe_failure_skips_fetch() {
        let mut registry = FakeRegistry::new();
        registry.fail_probe(MUSIC, kAudioProcessPropertyPID, kAudioHardwareBadObjectError);

        let objects = HardwareObjects::new(&registry);
        let err = objects.read_process_pid(MUSIC).unwrap_err();

        assert_eq!(
            err,
            HardwareError::PropertyUnavailable {
                object: MUSIC,
                address: PropertyAddress::global(kAudioProcessPropertyPID),
                status: kAudioHardwareBadObjectError,
            }
        );
        assert_eq!(registry.fetch_calls.get(), 0);
    }

    #[test]
    fn test_fetch_failure_reports_read_failed() {
        let mut registry = FakeRegistry::new();
        registry.fail_fetch(MUSIC, kAudioProcessPropertyIsRunningOutput, -50);

        let objects = HardwareObjects::new(&registry);
        let err = objects.read_process_is_running_output(MUSIC).unwrap_err();
        assert!(matches!(err, HardwareError::PropertyReadFailed { status: -50, .. }));
    }

    #[test]
    fn test_running_flag_decoding() {
        let mut registry = FakeRegistry::new();
        let cases: [(u32, bool); 4] = [(1, true), (0, false), (2, false), (4294967295, false)];
        for (index, (raw, _)) in cases.iter().enumerate() {
            registry.set_value(
                AudioObjectId::from_raw(100 + index as u32),
                kAudioProcessPropertyIsRunning,
                *raw,
            );
        }

        let objects = HardwareObjects::new(&registry);
        for (index, (raw, expected)) in cases.iter().enumerate() {
            let object = AudioObjectId::from_raw(100 + index as u32);
            assert_eq!(
                objects.try_read_process_is_running(object).unwrap(),
                *expected,
                "raw value {}",
                raw
            );
        }
    }

    #[test]
    fn test_unreadable_running_state_is_false() {
        let mut registry = FakeRegistry::new();
        registry.fail_probe(
            SAFARI,
            kAudioProcessPropertyIsRunning,
            kAudioHardwareUnknownPropertyError,
        );

        let objects = HardwareObjects::new(&registry);
        assert!(!objects.read_process_is_running(SAFARI));
        assert!(objects.try_read_process_is_running(SAFARI).is_err());
    }

    #[test]
    fn test_bundle_id_normalization() {
        let mut registry = FakeRegistry::new();
        registry.set_text(MUSIC, kAudioProcessPropertyBundleID, "com.apple.Music");
        registry.set_text(SAFARI, kAudioProcessPropertyBundleID, "");

        let objects = HardwareObjects::new(&registry);
        assert_eq!(
            objects.read_process_bundle_id(MUSIC).as_deref(),
            Some("com.apple.Music")
        );
        assert_eq!(objects.read_process_bundle_id(SAFARI), None);
        assert_eq!(objects.read_process_bundle_id(DEVICE), None);
    }

    #[test]
    fn test_process_devices_and_input_flag() {
        let mut registry = FakeRegistry::new();
        registry.set_array(MUSIC, kAudioProcessPropertyDevices, &[DEVICE]);
        registry.set_value(MUSIC, kAudioProcessPropertyIsRunningInput, 0u32);

        let objects = HardwareObjects::new(&registry);
        assert_eq!(objects.read_process_devices(MUSIC).unwrap(), vec![DEVICE]);
        assert!(!objects.read_process_is_running_input(MUSIC).unwrap());
    }

    #[test]
    fn test_stream_format() {
        let format = StreamFormat {
            sample_rate: 44_100.0,
            format_id: fourcc(b"lpcm"),
            format_flags: 41,
            bytes_per_packet: 4,
            frames_per_packet: 1,
            bytes_per_frame: 4,
            channels_per_frame: 2,
            bits_per_channel: 32,
            reserved: 0,
        };
        let mut registry = FakeRegistry::new();
        registry.set_value(DEVICE, kAudioTapPropertyFormat, format);

        let objects = HardwareObjects::new(&registry);
        assert_eq!(objects.read_stream_format(DEVICE).unwrap(), format);
    }

    #[test]
    fn test_stale_handle_reports_unavailable() {
        let registry = FakeRegistry::new();
        let objects = HardwareObjects::new(&registry);

        let err = objects
            .read_device_uid(AudioObjectId::from_raw(9999))
            .unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(err.status(), Some(kAudioHardwareUnknownPropertyError));
        assert!(err.to_string().contains("uid /glob/main"));
    }
}
