//! Environment retrieval for a resolved process.
//!
//! Most platforms expose another process's environment block through the
//! system process table. FreeBSD does not, so builds for it shell out to
//! procstat(1) instead (see [`crate::environ::procstat`]). Exactly one
//! strategy is compiled per target behind the same function signature;
//! callers always receive raw `NAME=VALUE` entries.

use crate::environ::errors::EnvironError;
use crate::process::ProcessRef;

/// Read the raw environment block of `target` as `NAME=VALUE` strings.
#[cfg(not(target_os = "freebsd"))]
pub fn read_environment(target: &ProcessRef) -> Result<Vec<String>, EnvironError> {
    use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
    use tracing::debug;

    // The environment block is only read when asked for explicitly; a plain
    // refresh_processes leaves environ() empty.
    let mut system = System::new();
    let sys_pid = target.pid.to_sysinfo_pid();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[sys_pid]),
        true,
        ProcessRefreshKind::nothing().with_environ(UpdateKind::OnlyIfNotSet),
    );

    let process = system
        .process(sys_pid)
        .ok_or_else(|| EnvironError::Unavailable {
            pid: target.pid.as_u32(),
            message: "process is no longer running".to_string(),
        })?;

    let entries: Vec<String> = process
        .environ()
        .iter()
        .map(|entry| entry.to_string_lossy().into_owned())
        .collect();

    if entries.is_empty() {
        // sysinfo reports an empty block both for genuinely empty
        // environments and for processes we lack permission to inspect.
        return Err(EnvironError::Unavailable {
            pid: target.pid.as_u32(),
            message: "environment is empty or not readable".to_string(),
        });
    }

    debug!(
        event = "core.environ.read",
        pid = target.pid.as_u32(),
        entries = entries.len()
    );
    Ok(entries)
}

/// Read the raw environment block of `target` as `NAME=VALUE` strings.
#[cfg(target_os = "freebsd")]
pub fn read_environment(target: &ProcessRef) -> Result<Vec<String>, EnvironError> {
    crate::environ::procstat::read_environment(target)
}
