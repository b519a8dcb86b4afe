use serde::{Deserialize, Serialize};
use sysinfo::Pid as SysinfoPid;

/// Platform-safe process ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(u32);

impl Pid {
    pub fn new(pid: u32) -> Result<Self, crate::process::errors::ProcessError> {
        if pid == 0 {
            return Err(crate::process::errors::ProcessError::InvalidPid {
                pid: pid.to_string(),
            });
        }
        Ok(Self(pid))
    }

    pub fn from_raw(pid: u32) -> Self {
        Self(pid)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn to_sysinfo_pid(&self) -> SysinfoPid {
        SysinfoPid::from_u32(self.0)
    }
}

impl From<u32> for Pid {
    fn from(pid: u32) -> Self {
        Self(pid)
    }
}

/// A resolved target process.
///
/// Obtained once per invocation by the locator and never mutated; the
/// environment reader re-queries the process table by `pid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRef {
    pub pid: Pid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_from_u32() {
        let pid: Pid = 42u32.into();
        assert_eq!(pid.as_u32(), 42);
    }

    #[test]
    fn test_pid_new_rejects_zero() {
        assert!(Pid::new(0).is_err());
    }

    #[test]
    fn test_pid_new_accepts_nonzero() {
        assert!(Pid::new(1).is_ok());
    }

    #[test]
    fn test_pid_sysinfo_round_trip() {
        let pid = Pid::from_raw(1234);
        assert_eq!(pid.to_sysinfo_pid().as_u32(), 1234);
    }
}
