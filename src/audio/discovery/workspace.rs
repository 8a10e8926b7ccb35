// AppKit-backed lookups: running applications and file content types
//
// NSRunningApplication gives the GUI-visible identity of a PID. NSWorkspace
// reports a path's uniform type identifier, which is then checked against
// com.apple.bundle / com.apple.application with UTTypeConformsTo.

#![allow(non_snake_case)]

use std::path::{Path, PathBuf};
use std::ptr;

use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use objc2::msg_send;
use objc2::rc::Retained;
use objc2::runtime::{AnyClass, AnyObject};
use objc2_foundation::NSString;
use tracing::debug;

use super::collaborators::{ApplicationRegistry, BundleClassifier};
use super::types::RunningApplication;

const UTI_BUNDLE: &str = "com.apple.bundle";
const UTI_APPLICATION: &str = "com.apple.application";

extern "C" {
    /// CoreServices (LaunchServices) type conformance check
    fn UTTypeConformsTo(in_uti: CFStringRef, in_conforms_to_uti: CFStringRef) -> u8;
}

fn ns_string_to_owned(value: Option<Retained<NSString>>) -> Option<String> {
    value.map(|value| value.to_string())
}

/// Running applications as seen by `NSRunningApplication`
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceApplications;

impl ApplicationRegistry for WorkspaceApplications {
    fn running_application(&self, pid: i32) -> Option<RunningApplication> {
        if pid <= 0 {
            return None;
        }

        let class = AnyClass::get(c"NSRunningApplication")?;

        unsafe {
            let app: Option<Retained<AnyObject>> =
                msg_send![class, runningApplicationWithProcessIdentifier: pid];
            let app = app?;

            let terminated: bool = msg_send![&*app, isTerminated];
            if terminated {
                debug!("Application entry for pid {} has terminated", pid);
                return None;
            }

            let localized_name: Option<Retained<NSString>> = msg_send![&*app, localizedName];
            let bundle_identifier: Option<Retained<NSString>> = msg_send![&*app, bundleIdentifier];
            let bundle_url: Option<Retained<AnyObject>> = msg_send![&*app, bundleURL];
            let bundle_path = match bundle_url {
                Some(url) => {
                    let path: Option<Retained<NSString>> = msg_send![&*url, path];
                    ns_string_to_owned(path).map(PathBuf::from)
                }
                None => None,
            };

            Some(RunningApplication {
                localized_name: ns_string_to_owned(localized_name),
                bundle_identifier: ns_string_to_owned(bundle_identifier),
                bundle_path,
            })
        }
    }
}

/// Bundle classification by uniform type identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeClassifier;

impl ContentTypeClassifier {
    fn type_identifier(path: &Path) -> Option<String> {
        let class = AnyClass::get(c"NSWorkspace")?;
        let path = NSString::from_str(path.to_str()?);

        unsafe {
            let workspace: Option<Retained<AnyObject>> = msg_send![class, sharedWorkspace];
            let workspace = workspace?;
            let uti: Option<Retained<NSString>> = msg_send![
                &*workspace,
                typeOfFile: &*path,
                error: ptr::null_mut::<*mut AnyObject>()
            ];
            ns_string_to_owned(uti)
        }
    }

    fn conforms_to(path: &Path, parent_type: &str) -> bool {
        let Some(uti) = Self::type_identifier(path) else {
            return false;
        };
        let uti = CFString::new(&uti);
        let parent_type = CFString::new(parent_type);
        unsafe {
            UTTypeConformsTo(uti.as_concrete_TypeRef(), parent_type.as_concrete_TypeRef()) != 0
        }
    }
}

impl BundleClassifier for ContentTypeClassifier {
    fn is_bundle(&self, path: &Path) -> bool {
        Self::conforms_to(path, UTI_BUNDLE)
    }

    fn is_application(&self, path: &Path) -> bool {
        Self::conforms_to(path, UTI_APPLICATION)
    }
}
