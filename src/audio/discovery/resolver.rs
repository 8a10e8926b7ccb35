// Process descriptor resolution
//
// Turns one process object from the hardware registry into a descriptor,
// trying the richest identity source first:
//   1. the running-application registry (GUI-visible name, bundle, path)
//   2. the OS process table (executable name, enclosing bundle)
//   3. the hardware-reported bundle ID, then "Unknown (<pid>)"
// Running state always comes from the hardware object, whichever tier names it.

use std::path::Path;

use tracing::debug;

use super::bundle::{last_reverse_dns_component, parent_bundle_path, DEFAULT_BUNDLE_SEARCH_DEPTH};
use super::collaborators::{ApplicationRegistry, BundleClassifier, ProcessInfoSource};
use super::types::{ProcessDescriptor, ProcessKind, RunningApplication};
use crate::audio::hardware::{AudioObjectId, HardwareObjects, HardwareRegistry};

/// PID reported when the process object won't say
pub const UNKNOWN_PID: i32 = -1;

pub fn unknown_process_name(pid: i32) -> String {
    format!("Unknown ({})", pid)
}

#[derive(Debug, Clone)]
pub struct ProcessResolver<A, P, C> {
    applications: A,
    processes: P,
    classifier: C,
    bundle_search_depth: usize,
}

impl<A, P, C> ProcessResolver<A, P, C>
where
    A: ApplicationRegistry,
    P: ProcessInfoSource,
    C: BundleClassifier,
{
    pub fn new(applications: A, processes: P, classifier: C) -> Self {
        Self {
            applications,
            processes,
            classifier,
            bundle_search_depth: DEFAULT_BUNDLE_SEARCH_DEPTH,
        }
    }

    pub fn with_bundle_search_depth(mut self, depth: usize) -> Self {
        self.bundle_search_depth = depth;
        self
    }

    /// Always produces a descriptor; every lookup along the way is best-effort.
    pub fn resolve<R: HardwareRegistry>(
        &self,
        objects: &HardwareObjects<R>,
        object: AudioObjectId,
    ) -> ProcessDescriptor {
        let pid = objects.read_process_pid(object).unwrap_or_else(|e| {
            debug!("PID unavailable for {}: {}", object, e);
            UNKNOWN_PID
        });
        let audio_active = objects.read_process_is_running(object);

        if let Some(app) = self.applications.running_application(pid) {
            return self.from_application(pid, app, audio_active, object);
        }

        let bundle_identifier = objects.read_process_bundle_id(object);

        let (display_name, bundle_path) = if let Some(info) = self.processes.process_info(pid) {
            let bundle_path = parent_bundle_path(
                &info.executable_path,
                &self.classifier,
                self.bundle_search_depth,
            );
            (info.name, bundle_path)
        } else if let Some(name) = bundle_identifier
            .as_deref()
            .and_then(last_reverse_dns_component)
        {
            (name.to_string(), None)
        } else {
            (unknown_process_name(pid), None)
        };

        crate::scan_debug!(
            "resolved {} as '{}' (pid {}, bundle {:?})",
            object,
            display_name,
            pid,
            bundle_path
        );

        ProcessDescriptor {
            pid,
            kind: self.classify(bundle_path.as_deref()),
            display_name,
            audio_active,
            bundle_identifier,
            bundle_path,
            object_id: object,
        }
    }

    fn from_application(
        &self,
        pid: i32,
        app: RunningApplication,
        audio_active: bool,
        object: AudioObjectId,
    ) -> ProcessDescriptor {
        let bundle_identifier = app.bundle_identifier.filter(|id| !id.is_empty());

        let display_name = app
            .localized_name
            .filter(|name| !name.is_empty())
            .or_else(|| {
                app.bundle_path
                    .as_deref()
                    .and_then(Path::file_stem)
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .or_else(|| {
                bundle_identifier
                    .as_deref()
                    .and_then(last_reverse_dns_component)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| unknown_process_name(pid));

        ProcessDescriptor {
            pid,
            kind: self.classify(app.bundle_path.as_deref()),
            display_name,
            audio_active,
            bundle_identifier,
            bundle_path: app.bundle_path,
            object_id: object,
        }
    }

    fn classify(&self, bundle_path: Option<&Path>) -> ProcessKind {
        match bundle_path {
            Some(path) if self.classifier.is_application(path) => ProcessKind::Application,
            _ => ProcessKind::Process,
        }
    }
}
