use crate::errors::SessenvError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Invalid PID '{pid}'")]
    InvalidPid { pid: String },

    #[error("Process '{pid}' not found")]
    NotFound { pid: u32 },

    #[error("No process named '{name}' found for the current user")]
    NoMatch { name: String },

    #[error("More than one process named '{name}' found ({count} matches); select one by PID")]
    Ambiguous { name: String, count: usize },

    #[error("System error: {message}")]
    SystemError { message: String },
}

impl SessenvError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::InvalidPid { .. } => "INVALID_PID",
            ProcessError::NotFound { .. } => "PROCESS_NOT_FOUND",
            ProcessError::NoMatch { .. } => "NO_PROCESS_FOUND",
            ProcessError::Ambiguous { .. } => "AMBIGUOUS_PROCESS",
            ProcessError::SystemError { .. } => "PROCESS_SYSTEM_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ProcessError::InvalidPid { .. }
                | ProcessError::NotFound { .. }
                | ProcessError::NoMatch { .. }
                | ProcessError::Ambiguous { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_names_count() {
        let error = ProcessError::Ambiguous {
            name: "gnome-session".to_string(),
            count: 3,
        };
        let msg = error.to_string();
        assert!(msg.contains("gnome-session"));
        assert!(msg.contains("3 matches"));
    }

    #[test]
    fn test_no_match_is_user_error() {
        let error = ProcessError::NoMatch {
            name: "firefox".to_string(),
        };
        assert!(error.is_user_error());
        assert_eq!(error.error_code(), "NO_PROCESS_FOUND");
    }
}
