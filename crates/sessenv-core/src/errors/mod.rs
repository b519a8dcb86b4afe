use std::error::Error;

/// Base trait for all application errors
pub trait SessenvError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type SessenvResult<T> = Result<T, Box<dyn SessenvError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessenv_result() {
        let _result: SessenvResult<i32> = Ok(42);
    }

    #[test]
    fn test_process_error_codes() {
        let error = crate::process::ProcessError::NotFound { pid: 1234 };
        assert_eq!(error.error_code(), "PROCESS_NOT_FOUND");
        assert!(error.is_user_error());

        let error = crate::process::ProcessError::SystemError {
            message: "process table unreadable".to_string(),
        };
        assert_eq!(error.error_code(), "PROCESS_SYSTEM_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_environ_error_codes() {
        let error = crate::environ::EnvironError::Unavailable {
            pid: 42,
            message: "process is no longer running".to_string(),
        };
        assert_eq!(error.error_code(), "ENVIRONMENT_UNAVAILABLE");
        assert!(error.is_user_error());
    }
}
