// Audio process discovery
//
// Enumerates the process objects the audio system knows about and resolves
// each into a ProcessDescriptor. Results are never cached: every call reads
// the registry afresh.

use tracing::{debug, info};

use super::collaborators::{ApplicationRegistry, BundleClassifier, ProcessInfoSource};
use super::resolver::ProcessResolver;
use super::types::{ProcessDescriptor, Result};
use crate::audio::hardware::{AudioObjectId, HardwareObjects, HardwareRegistry};

/// Discovers which processes are producing audio
#[derive(Debug, Clone)]
pub struct AudioProcessDiscovery<R, A, P, C> {
    objects: HardwareObjects<R>,
    resolver: ProcessResolver<A, P, C>,
}

impl<R, A, P, C> AudioProcessDiscovery<R, A, P, C>
where
    R: HardwareRegistry,
    A: ApplicationRegistry,
    P: ProcessInfoSource,
    C: BundleClassifier,
{
    pub fn new(registry: R, applications: A, processes: P, classifier: C) -> Self {
        Self {
            objects: HardwareObjects::new(registry),
            resolver: ProcessResolver::new(applications, processes, classifier),
        }
    }

    pub fn with_bundle_search_depth(mut self, depth: usize) -> Self {
        self.resolver = self.resolver.with_bundle_search_depth(depth);
        self
    }

    pub fn objects(&self) -> &HardwareObjects<R> {
        &self.objects
    }

    /// Resolve a single process object
    pub fn describe(&self, object: AudioObjectId) -> ProcessDescriptor {
        self.resolver.resolve(&self.objects, object)
    }

    /// Every process object, resolved. Unknown slots in the list are skipped.
    pub fn enumerate_audio_processes(&self) -> Result<Vec<ProcessDescriptor>> {
        let process_objects = self.objects.process_objects()?;
        debug!("Audio system reports {} process objects", process_objects.len());

        Ok(process_objects
            .into_iter()
            .filter(|object| object.is_valid())
            .map(|object| self.describe(object))
            .collect())
    }

    /// Only the processes currently doing audio I/O
    pub fn enumerate_active_audio_processes(&self) -> Result<Vec<ProcessDescriptor>> {
        let process_objects = self.objects.process_objects()?;

        let active: Vec<ProcessDescriptor> = process_objects
            .into_iter()
            .filter(|object| object.is_valid())
            .map(|object| self.describe(object))
            .filter(|descriptor| descriptor.audio_active)
            .collect();

        info!("Found {} active audio processes", active.len());
        Ok(active)
    }

    /// Whether any process object reports running audio
    pub fn any_audio_active(&self) -> Result<bool> {
        let process_objects = self.objects.process_objects()?;
        Ok(process_objects
            .into_iter()
            .any(|object| object.is_valid() && self.objects.read_process_is_running(object)))
    }

    /// Resolve the process object that belongs to `pid`
    pub fn descriptor_for_pid(&self, pid: i32) -> Result<ProcessDescriptor> {
        let object = self.objects.process_object_for_pid(pid)?;
        Ok(self.describe(object))
    }

    /// UID of the default system output device
    pub fn default_output_device_uid(&self) -> Result<String> {
        let device = self.objects.default_system_output_device()?;
        Ok(self.objects.read_device_uid(device)?)
    }
}
