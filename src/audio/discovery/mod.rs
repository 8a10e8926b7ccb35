// Audio process discovery module
//
// Resolves audio process objects into process descriptors, combining the
// hardware registry with host lookups (running applications, the OS process
// table, bundle classification).
pub mod bundle;
pub mod collaborators;
pub mod process_discovery;
pub mod process_table;
pub mod resolver;
pub mod types;

// Platform-specific lookups
#[cfg(target_os = "macos")]
pub mod workspace;

pub use bundle::{parent_bundle_path, DEFAULT_BUNDLE_SEARCH_DEPTH};
pub use collaborators::{
    ApplicationRegistry, BundleClassifier, NoApplications, NoBundles, ProcessInfoSource,
};
pub use process_discovery::AudioProcessDiscovery;
pub use process_table::SysinfoProcesses;
pub use resolver::{unknown_process_name, ProcessResolver, UNKNOWN_PID};
pub use types::{
    DiscoveryError, OsProcessInfo, ProcessDescriptor, ProcessKind, Result, RunningApplication,
};

#[cfg(target_os = "macos")]
pub use workspace::{ContentTypeClassifier, WorkspaceApplications};
