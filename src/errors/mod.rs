//! Error handling utilities for the diary application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Represents specific error cases that can occur when interacting with external editors.
///
/// # Examples
///
/// ```
/// use diary::errors::EditorError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "command not found");
/// let error = EditorError::CommandNotFound {
///     command: "vim".to_string(),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("not found"));
/// assert!(format!("{}", error).contains("vim"));
/// ```
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error when the specified editor command cannot be found.
    #[error("Editor command '{command}' not found: {source}. Please check that the editor is installed and available in your PATH.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("Permission denied when trying to execute editor '{command}': {source}. Please check file permissions or try running with appropriate access rights.")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("Failed to execute editor '{command}': {source}")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The editor command line contains characters that are never passed to a program.
    #[error("Invalid editor command '{command}': {reason}")]
    InvalidCommand {
        /// The rejected command line
        command: String,
        /// Why it was rejected
        reason: String,
    },

    /// No editor is configured (`EDITOR` and `DIARY_EDITOR` set to an empty string).
    #[error("No editor configured. Set EDITOR or DIARY_EDITOR to use the edit command.")]
    NotConfigured,
}

/// Errors raised while running the external volume tool.
#[derive(Debug, Error)]
pub enum VolumeError {
    /// The tool could not be started.
    #[error("Failed to run volume tool '{command}': {source}")]
    ExecutionFailed {
        /// The tool that failed to start
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The tool ran but reported failure.
    #[error("Volume tool '{command}' exited with non-zero status code: {status_code}")]
    NonZeroExit {
        /// The tool that failed
        command: String,
        /// The exit status code
        status_code: i32,
    },
}

/// Represents all possible errors that can occur in the diary application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// ```
/// use diary::errors::AppError;
///
/// let error = AppError::Config("Missing diary folder".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing diary folder");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or the diary folder check.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A date expression that the date resolver could not understand.
    #[error("Invalid date format: '{0}'")]
    InvalidDate(String),

    /// A command was invoked without an argument it needs.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// Errors when interacting with the text editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// Errors when mounting or dismounting the diary volume.
    #[error("Volume error: {0}")]
    Volume(#[from] VolumeError),
}

impl AppError {
    /// Whether usage help should accompany this error on the terminal.
    pub fn wants_usage(&self) -> bool {
        matches!(self, AppError::InvalidDate(_) | AppError::MissingArgument(_))
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
