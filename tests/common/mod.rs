// Shared fakes for integration tests
//
// FakeRegistry answers probe/fetch from an in-memory table and counts every
// call. Text properties are stored as UTF-8 bytes and decoded directly.

#![allow(dead_code, non_upper_case_globals)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use audio_detect_lib::audio::discovery::{
    ApplicationRegistry, BundleClassifier, OsProcessInfo, ProcessInfoSource, RunningApplication,
};
use audio_detect_lib::audio::hardware::property_address::*;
use audio_detect_lib::audio::hardware::types::to_bytes;
use audio_detect_lib::audio::hardware::{
    AudioObjectId, HardwareRegistry, OSStatus, PlainValue, PropertyAddress,
};

pub const kAudioHardwareUnknownPropertyError: OSStatus = 2003332927; // 'who?'
pub const kAudioHardwareBadObjectError: OSStatus = 560947818; // '!obj'

#[derive(Debug, Clone)]
enum FakeProperty {
    Bytes(Vec<u8>),
    ProbeFails(OSStatus),
    FetchFails(OSStatus),
}

#[derive(Default)]
pub struct FakeRegistry {
    properties: HashMap<(AudioObjectId, u32), FakeProperty>,
    pid_objects: HashMap<i32, AudioObjectId>,
    pub probe_calls: Cell<usize>,
    pub fetch_calls: Cell<usize>,
    pub reads: RefCell<Vec<(AudioObjectId, PropertyAddress)>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value<T: PlainValue>(
        &mut self,
        object: AudioObjectId,
        selector: u32,
        value: T,
    ) -> &mut Self {
        self.properties
            .insert((object, selector), FakeProperty::Bytes(to_bytes(value)));
        self
    }

    pub fn set_array<T: PlainValue>(
        &mut self,
        object: AudioObjectId,
        selector: u32,
        values: &[T],
    ) -> &mut Self {
        let bytes = values.iter().flat_map(|value| to_bytes(*value)).collect();
        self.properties.insert((object, selector), FakeProperty::Bytes(bytes));
        self
    }

    pub fn set_text(&mut self, object: AudioObjectId, selector: u32, text: &str) -> &mut Self {
        self.properties
            .insert((object, selector), FakeProperty::Bytes(text.as_bytes().to_vec()));
        self
    }

    pub fn fail_probe(
        &mut self,
        object: AudioObjectId,
        selector: u32,
        status: OSStatus,
    ) -> &mut Self {
        self.properties
            .insert((object, selector), FakeProperty::ProbeFails(status));
        self
    }

    pub fn fail_fetch(
        &mut self,
        object: AudioObjectId,
        selector: u32,
        status: OSStatus,
    ) -> &mut Self {
        self.properties
            .insert((object, selector), FakeProperty::FetchFails(status));
        self
    }

    /// Registers `pid` for PID translation. Unregistered PIDs translate to unknown.
    pub fn map_pid(&mut self, pid: i32, object: AudioObjectId) -> &mut Self {
        self.pid_objects.insert(pid, object);
        self
    }

    /// A process object with a PID, running flag and optional bundle ID
    pub fn add_process(
        &mut self,
        object: AudioObjectId,
        pid: i32,
        running: bool,
        bundle_id: Option<&str>,
    ) -> &mut Self {
        self.set_value(object, kAudioProcessPropertyPID, pid);
        self.set_value(object, kAudioProcessPropertyIsRunning, running as u32);
        if let Some(bundle_id) = bundle_id {
            self.set_text(object, kAudioProcessPropertyBundleID, bundle_id);
        }
        self.map_pid(pid, object)
    }

    pub fn set_process_list(&mut self, objects: &[AudioObjectId]) -> &mut Self {
        self.set_array(
            AudioObjectId::SYSTEM,
            kAudioHardwarePropertyProcessObjectList,
            objects,
        )
    }

    pub fn calls(&self) -> usize {
        self.probe_calls.get() + self.fetch_calls.get()
    }

    fn value_for(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
    ) -> Result<Vec<u8>, (bool, OSStatus)> {
        if object.is_system()
            && address.selector == kAudioHardwarePropertyTranslatePIDToProcessObject
        {
            if qualifier.len() != 4 {
                return Err((true, -50));
            }
            let pid = i32::read_bytes(qualifier);
            let translated = self
                .pid_objects
                .get(&pid)
                .copied()
                .unwrap_or(AudioObjectId::UNKNOWN);
            return Ok(to_bytes(translated));
        }

        match self.properties.get(&(object, address.selector)) {
            Some(FakeProperty::Bytes(bytes)) => Ok(bytes.clone()),
            Some(FakeProperty::ProbeFails(status)) => Err((true, *status)),
            Some(FakeProperty::FetchFails(status)) => Err((false, *status)),
            None if object.is_valid() => Err((true, kAudioHardwareUnknownPropertyError)),
            None => Err((true, kAudioHardwareBadObjectError)),
        }
    }
}

impl HardwareRegistry for FakeRegistry {
    fn probe_size(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
    ) -> Result<u32, OSStatus> {
        self.probe_calls.set(self.probe_calls.get() + 1);
        self.reads.borrow_mut().push((object, address));
        match self.value_for(object, address, qualifier) {
            Ok(bytes) => Ok(bytes.len() as u32),
            Err((true, status)) => Err(status),
            // Fetch failures still probe successfully
            Err((false, _)) => Ok(4),
        }
    }

    fn fetch(
        &self,
        object: AudioObjectId,
        address: PropertyAddress,
        qualifier: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, OSStatus> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        match self.value_for(object, address, qualifier) {
            Ok(bytes) => {
                let written = bytes.len().min(buffer.len());
                buffer[..written].copy_from_slice(&bytes[..written]);
                Ok(written)
            }
            Err((_, status)) => Err(status),
        }
    }

    fn decode_text(&self, raw: &[u8]) -> Option<String> {
        String::from_utf8(raw.to_vec()).ok()
    }
}

#[derive(Default)]
pub struct FakeApplications {
    apps: HashMap<i32, RunningApplication>,
    pub lookups: Cell<usize>,
}

impl FakeApplications {
    pub fn with(mut self, pid: i32, app: RunningApplication) -> Self {
        self.apps.insert(pid, app);
        self
    }
}

impl ApplicationRegistry for FakeApplications {
    fn running_application(&self, pid: i32) -> Option<RunningApplication> {
        self.lookups.set(self.lookups.get() + 1);
        self.apps.get(&pid).cloned()
    }
}

#[derive(Default)]
pub struct FakeProcesses {
    processes: HashMap<i32, OsProcessInfo>,
    pub lookups: Cell<usize>,
}

impl FakeProcesses {
    pub fn with(mut self, pid: i32, name: &str, executable_path: &str) -> Self {
        self.processes.insert(
            pid,
            OsProcessInfo {
                name: name.to_string(),
                executable_path: PathBuf::from(executable_path),
            },
        );
        self
    }
}

impl ProcessInfoSource for FakeProcesses {
    fn process_info(&self, pid: i32) -> Option<OsProcessInfo> {
        self.lookups.set(self.lookups.get() + 1);
        self.processes.get(&pid).cloned()
    }
}

/// Classifies exact paths: anything listed is a bundle, `apps` are also applications
#[derive(Default)]
pub struct FakeClassifier {
    bundles: HashSet<PathBuf>,
    apps: HashSet<PathBuf>,
}

impl FakeClassifier {
    pub fn bundle(mut self, path: &str) -> Self {
        self.bundles.insert(PathBuf::from(path));
        self
    }

    pub fn app(mut self, path: &str) -> Self {
        self.bundles.insert(PathBuf::from(path));
        self.apps.insert(PathBuf::from(path));
        self
    }
}

impl BundleClassifier for FakeClassifier {
    fn is_bundle(&self, path: &Path) -> bool {
        self.bundles.contains(path)
    }

    fn is_application(&self, path: &Path) -> bool {
        self.apps.contains(path)
    }
}
