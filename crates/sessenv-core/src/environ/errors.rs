use crate::errors::SessenvError;

/// Failures while retrieving a target process's environment block.
///
/// All variants are refinements of the same user-visible condition: the
/// environment could not be obtained for the resolved process.
#[derive(Debug, thiserror::Error)]
pub enum EnvironError {
    #[error("Environment of process '{pid}' is unavailable: {message}")]
    Unavailable { pid: u32, message: String },

    #[error("Failed to run procstat(1): {message}")]
    ProcstatFailed { message: String },

    #[error("Failed to parse procstat(1) output: {message}")]
    ParseFailed { message: String },

    #[error("No environment entry for PID {pid} in procstat(1) output")]
    MissingEntry { pid: u32 },

    #[error("Empty environment vector for PID {pid}")]
    EmptyEnvironment { pid: u32 },
}

impl SessenvError for EnvironError {
    fn error_code(&self) -> &'static str {
        match self {
            EnvironError::Unavailable { .. } => "ENVIRONMENT_UNAVAILABLE",
            EnvironError::ProcstatFailed { .. } => "PROCSTAT_FAILED",
            EnvironError::ParseFailed { .. } => "PROCSTAT_PARSE_FAILED",
            EnvironError::MissingEntry { .. } => "PROCSTAT_MISSING_ENTRY",
            EnvironError::EmptyEnvironment { .. } => "PROCSTAT_EMPTY_ENVIRONMENT",
        }
    }

    fn is_user_error(&self) -> bool {
        // Unavailable usually means the process exited or belongs to another
        // user; the procstat variants indicate tooling faults.
        matches!(self, EnvironError::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_pid() {
        let error = EnvironError::Unavailable {
            pid: 4321,
            message: "process is no longer running".to_string(),
        };
        assert!(error.to_string().contains("4321"));
        assert!(error.is_user_error());
    }

    #[test]
    fn test_procstat_variants_are_not_user_errors() {
        let error = EnvironError::ParseFailed {
            message: "unexpected token".to_string(),
        };
        assert!(!error.is_user_error());
        assert_eq!(error.error_code(), "PROCSTAT_PARSE_FAILED");
    }
}
