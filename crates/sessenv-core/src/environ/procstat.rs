//! procstat(1) fallback for FreeBSD.
//!
//! FreeBSD does not expose another process's environment through the
//! process table, so the reader runs `procstat --libxo json penv <pid>` and
//! extracts the `envp` vector from the resulting JSON document. The parser
//! is pure and compiled on every platform; only the invocation is gated.

use std::collections::HashMap;

use serde::Deserialize;

use crate::environ::errors::EnvironError;

#[derive(Debug, Deserialize)]
struct ProcstatDocument {
    procstat: ProcstatSection,
}

#[derive(Debug, Deserialize)]
struct ProcstatSection {
    env: HashMap<String, ProcstatEntry>,
}

#[derive(Debug, Deserialize)]
struct ProcstatEntry {
    #[serde(default)]
    envp: Vec<String>,
}

/// Extract the environment vector for `pid` from libxo JSON output.
///
/// Entries are keyed by the PID formatted as a plain decimal string. Never
/// derive the key by casting the numeric PID to a character; that turns
/// multi-digit PIDs into unrelated Unicode text.
pub fn parse_environment(output: &[u8], pid: u32) -> Result<Vec<String>, EnvironError> {
    let document: ProcstatDocument =
        serde_json::from_slice(output).map_err(|e| EnvironError::ParseFailed {
            message: e.to_string(),
        })?;

    let key = pid.to_string();
    let entry = document
        .procstat
        .env
        .get(&key)
        .ok_or(EnvironError::MissingEntry { pid })?;

    if entry.envp.is_empty() {
        // An empty vector from procstat is indistinguishable from a tooling
        // fault; treat it as a hard failure rather than an empty result.
        return Err(EnvironError::EmptyEnvironment { pid });
    }

    Ok(entry.envp.clone())
}

#[cfg(target_os = "freebsd")]
pub fn read_environment(
    target: &crate::process::ProcessRef,
) -> Result<Vec<String>, EnvironError> {
    use std::process::Command;
    use tracing::debug;

    let pid = target.pid.as_u32();
    let pid_arg = pid.to_string();

    let output = Command::new("procstat")
        .args(["--libxo", "json", "penv", &pid_arg])
        .output()
        .map_err(|e| EnvironError::ProcstatFailed {
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(EnvironError::ProcstatFailed {
            message: format!("exited with {}", output.status),
        });
    }

    debug!(
        event = "core.environ.procstat_completed",
        pid = pid,
        bytes = output.stdout.len()
    );

    parse_environment(&output.stdout, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(pid: &str, envp: &[&str]) -> String {
        let envp_json = envp
            .iter()
            .map(|e| format!("{:?}", e))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            r#"{{"__version": "2", "procstat": {{"env": {{"{pid}": {{"process_id": {pid}, "command": "sh", "envp": [{envp_json}]}}}}}}}}"#
        )
    }

    #[test]
    fn test_parse_environment_extracts_envp() {
        let doc = sample_document("1234", &["DISPLAY=:0", "FOO=bar baz"]);
        let entries = parse_environment(doc.as_bytes(), 1234).unwrap();
        assert_eq!(entries, vec!["DISPLAY=:0", "FOO=bar baz"]);
    }

    #[test]
    fn test_parse_environment_missing_pid_entry() {
        let doc = sample_document("1234", &["DISPLAY=:0"]);
        let result = parse_environment(doc.as_bytes(), 999);
        assert!(matches!(
            result,
            Err(EnvironError::MissingEntry { pid: 999 })
        ));
    }

    #[test]
    fn test_parse_environment_empty_envp_is_an_error() {
        let doc = sample_document("1234", &[]);
        let result = parse_environment(doc.as_bytes(), 1234);
        assert!(matches!(
            result,
            Err(EnvironError::EmptyEnvironment { pid: 1234 })
        ));
    }

    #[test]
    fn test_parse_environment_rejects_garbage() {
        let result = parse_environment(b"not json at all", 1234);
        assert!(matches!(result, Err(EnvironError::ParseFailed { .. })));
    }

    #[test]
    fn test_parse_environment_multi_digit_pid_key() {
        // The lookup key must be the decimal rendering of the PID, so a
        // multi-digit PID resolves its own entry and nothing else.
        let doc = sample_document("54321", &["SSH_AUTH_SOCK=/tmp/agent.54321"]);
        let entries = parse_environment(doc.as_bytes(), 54321).unwrap();
        assert_eq!(entries, vec!["SSH_AUTH_SOCK=/tmp/agent.54321"]);
    }
}
