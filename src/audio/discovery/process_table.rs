// OS process table lookups
//
// Executable name and path by PID, through sysinfo. Only the one process is
// refreshed per lookup rather than the whole table.

use std::sync::Mutex;

use sysinfo::{Pid, System};

use super::collaborators::ProcessInfoSource;
use super::types::OsProcessInfo;

pub struct SysinfoProcesses {
    system: Mutex<System>,
}

impl SysinfoProcesses {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for SysinfoProcesses {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessInfoSource for SysinfoProcesses {
    fn process_info(&self, pid: i32) -> Option<OsProcessInfo> {
        let pid = Pid::from_u32(u32::try_from(pid).ok()?);
        let mut system = self.system.lock().ok()?;

        if !system.refresh_process(pid) {
            return None;
        }

        let process = system.process(pid)?;
        let name = process.name();
        let executable_path = process.exe()?;

        if name.is_empty() || executable_path.as_os_str().is_empty() {
            return None;
        }

        Some(OsProcessInfo {
            name: name.to_string(),
            executable_path: executable_path.to_path_buf(),
        })
    }
}

impl std::fmt::Debug for SysinfoProcesses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysinfoProcesses")
            .field("system", &"sysinfo::System")
            .finish()
    }
}
