//! Error types for Piton operations.
//!
//! This module defines [`PitonError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PitonError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PitonError::Other`) for unexpected errors
//! - Missing-dependency outcomes are NOT errors: they flow through
//!   [`BootstrapOutcome`](crate::requirements::BootstrapOutcome) so the entry
//!   point alone decides to terminate the process

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Piton operations.
#[derive(Debug, Error)]
pub enum PitonError {
    /// No usable Python interpreter was found.
    #[error("Python interpreter not found: {hint}")]
    InterpreterNotFound { hint: String },

    /// The interpreter could not answer an existence check.
    #[error("Probe for module '{module}' failed: {message}")]
    ProbeFailed { module: String, message: String },

    /// A module name is not a valid dotted identifier.
    #[error("Invalid module name: '{module}'")]
    InvalidModuleName { module: String },

    /// Requirements file not found at an explicitly given location.
    #[error("Requirements file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the requirements file.
    #[error("Failed to parse requirements at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid requirements structure or values.
    #[error("Invalid requirements: {message}")]
    ConfigValidationError { message: String },

    /// A subprocess could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Prompting was needed but no interactive input is attached.
    #[error("Cannot prompt for '{key}' without an interactive terminal")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Piton operations.
pub type Result<T> = std::result::Result<T, PitonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_not_found_displays_hint() {
        let err = PitonError::InterpreterNotFound {
            hint: "tried python3, python".into(),
        };
        assert!(err.to_string().contains("python3"));
    }

    #[test]
    fn probe_failed_displays_module_and_message() {
        let err = PitonError::ProbeFailed {
            module: "requests".into(),
            message: "interpreter exited with signal".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("requests"));
        assert!(msg.contains("signal"));
    }

    #[test]
    fn invalid_module_name_displays_module() {
        let err = PitonError::InvalidModuleName {
            module: "os; import evil".into(),
        };
        assert!(err.to_string().contains("os; import evil"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = PitonError::ConfigNotFound {
            path: PathBuf::from("/foo/piton.yml"),
        };
        assert!(err.to_string().contains("/foo/piton.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PitonError::ConfigParseError {
            path: PathBuf::from("/piton.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/piton.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = PitonError::CommandFailed {
            command: "python3 -m pip --version".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip --version"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn prompt_unavailable_displays_key() {
        let err = PitonError::PromptUnavailable {
            key: "install_now".into(),
        };
        assert!(err.to_string().contains("install_now"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PitonError = io_err.into();
        assert!(matches!(err, PitonError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PitonError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
