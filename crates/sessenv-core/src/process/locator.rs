//! Process resolution: a selector is either a PID literal or an exact
//! process name scoped to the invoking user.

use std::ffi::OsStr;

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};
use tracing::debug;

use crate::process::errors::ProcessError;
use crate::process::types::{Pid, ProcessRef};

/// Resolve the invoking user's username through the process table.
pub fn current_username() -> Result<String, ProcessError> {
    let pid = sysinfo::get_current_pid().map_err(|e| ProcessError::SystemError {
        message: format!("Failed to determine current PID: {}", e),
    })?;

    // A plain refresh_processes never populates process ownership; ask for
    // the user id explicitly.
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_user(UpdateKind::OnlyIfNotSet),
    );

    let process = system
        .process(pid)
        .ok_or_else(|| ProcessError::SystemError {
            message: "Current process missing from the process table".to_string(),
        })?;

    let uid = process.user_id().ok_or_else(|| ProcessError::SystemError {
        message: "Current process has no resolvable owner".to_string(),
    })?;

    let users = Users::new_with_refreshed_list();
    users
        .get_user_by_id(uid)
        .map(|user| user.name().to_string())
        .ok_or_else(|| ProcessError::SystemError {
            message: format!("No user entry for uid {:?}", uid),
        })
}

/// Resolve a selector to exactly one running process.
///
/// A selector that parses as a base-10 `u32` is treated as a PID literal;
/// anything else is matched exactly against process names owned by
/// `current_username` (no globbing, no substring match).
pub fn locate(selector: &str, current_username: &str) -> Result<ProcessRef, ProcessError> {
    if let Ok(raw) = selector.parse::<u32>() {
        let pid = Pid::new(raw)?;
        return locate_by_pid(pid);
    }
    // A numeric selector that does not fit the PID width (negative or
    // oversized) is a bad PID, not a process name.
    if looks_numeric(selector) {
        return Err(ProcessError::InvalidPid {
            pid: selector.to_string(),
        });
    }
    locate_by_name(selector, current_username)
}

fn looks_numeric(selector: &str) -> bool {
    let digits = selector.strip_prefix('-').unwrap_or(selector);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn locate_by_pid(pid: Pid) -> Result<ProcessRef, ProcessError> {
    let mut system = System::new();
    let sys_pid = pid.to_sysinfo_pid();
    system.refresh_processes(ProcessesToUpdate::Some(&[sys_pid]), true);

    match system.process(sys_pid) {
        Some(process) => {
            let target = ProcessRef {
                pid,
                name: process.name().to_string_lossy().to_string(),
            };
            debug!(
                event = "core.locator.pid_matched",
                pid = pid.as_u32(),
                name = %target.name
            );
            Ok(target)
        }
        None => Err(ProcessError::NotFound { pid: pid.as_u32() }),
    }
}

fn locate_by_name(name: &str, current_username: &str) -> Result<ProcessRef, ProcessError> {
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing().with_user(UpdateKind::OnlyIfNotSet),
    );
    let users = Users::new_with_refreshed_list();

    let mut matches = Vec::new();
    for (sys_pid, process) in system.processes() {
        // Skip processes whose owner cannot be determined (permission, or a
        // race where the process exited mid-enumeration).
        let Some(uid) = process.user_id() else {
            continue;
        };
        let Some(user) = users.get_user_by_id(uid) else {
            continue;
        };
        if user.name() != current_username {
            continue;
        }
        if process.name() != OsStr::new(name) {
            continue;
        }
        matches.push(ProcessRef {
            pid: Pid::from_raw(sys_pid.as_u32()),
            name: name.to_string(),
        });
    }

    debug!(
        event = "core.locator.name_scan_completed",
        name = name,
        matches = matches.len()
    );

    resolve_unique(matches, name)
}

/// Reduce a candidate list to exactly one match.
///
/// The tool never guesses between candidates; the caller disambiguates by
/// PID instead.
pub fn resolve_unique(
    mut matches: Vec<ProcessRef>,
    name: &str,
) -> Result<ProcessRef, ProcessError> {
    if matches.len() > 1 {
        return Err(ProcessError::Ambiguous {
            name: name.to_string(),
            count: matches.len(),
        });
    }
    match matches.pop() {
        Some(target) => Ok(target),
        None => Err(ProcessError::NoMatch {
            name: name.to_string(),
        }),
    }
}
