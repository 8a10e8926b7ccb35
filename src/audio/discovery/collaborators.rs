// Lookups the resolver depends on but doesn't own
//
// Running applications, the OS process table and bundle classification are
// all host services. They sit behind small traits so the resolver can be
// exercised with fixed answers.

use std::path::Path;

use super::types::{OsProcessInfo, RunningApplication};

pub trait ApplicationRegistry {
    /// The live application entry for `pid`, if the process is a running app
    fn running_application(&self, pid: i32) -> Option<RunningApplication>;
}

pub trait ProcessInfoSource {
    fn process_info(&self, pid: i32) -> Option<OsProcessInfo>;
}

/// Content-type classification of filesystem paths
pub trait BundleClassifier {
    fn is_bundle(&self, path: &Path) -> bool;
    fn is_application(&self, path: &Path) -> bool;
}

/// No running-application registry (non-macOS hosts)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoApplications;

impl ApplicationRegistry for NoApplications {
    fn running_application(&self, _pid: i32) -> Option<RunningApplication> {
        None
    }
}

/// Classifies nothing as a bundle (hosts without content types)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBundles;

impl BundleClassifier for NoBundles {
    fn is_bundle(&self, _path: &Path) -> bool {
        false
    }

    fn is_application(&self, _path: &Path) -> bool {
        false
    }
}

impl<T: ApplicationRegistry + ?Sized> ApplicationRegistry for &T {
    fn running_application(&self, pid: i32) -> Option<RunningApplication> {
        (**self).running_application(pid)
    }
}

impl<T: ProcessInfoSource + ?Sized> ProcessInfoSource for &T {
    fn process_info(&self, pid: i32) -> Option<OsProcessInfo> {
        (**self).process_info(pid)
    }
}

impl<T: BundleClassifier + ?Sized> BundleClassifier for &T {
    fn is_bundle(&self, path: &Path) -> bool {
        (**self).is_bundle(path)
    }

    fn is_application(&self, path: &Path) -> bool {
        (**self).is_application(path)
    }
}
