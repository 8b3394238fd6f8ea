//! Unified application error types for tabletmgr.
//!
//! Every failure surfaced by the hook pipeline carries exactly one
//! [`ErrorKind`], so callers can branch on the kind instead of parsing
//! message text.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The request was malformed (bad hook name, bad tablet path, ...).
    Validation,
    /// A tablet record or action node was not found.
    NotFound,
    /// The action queue rejected the request.
    Submission,
    /// The deadline expired while waiting for a remote action.
    Timeout,
    /// The action completed but left no reply record behind.
    ResultUnavailable,
    /// A stored payload could not be decoded.
    Decode,
    /// The hook ran and reported a non-zero exit status.
    HookExecution,
    /// A coordination store backend error occurred.
    Store,
    /// A configuration error occurred.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Submission => write!(f, "SUBMISSION"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::ResultUnavailable => write!(f, "RESULT_UNAVAILABLE"),
            Self::Decode => write!(f, "DECODE"),
            Self::HookExecution => write!(f, "HOOK_EXECUTION"),
            Self::Store => write!(f, "STORE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified application error used throughout tabletmgr.
///
/// Crate-specific failures are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a submission error.
    pub fn submission(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Submission, message)
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Create a result-unavailable error.
    pub fn result_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResultUnavailable, message)
    }

    /// Create a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Store, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a hook execution error from a structured failure.
    ///
    /// The failure is kept as the error source so callers can downcast to
    /// [`HookFailure`] for the exit code and captured stderr.
    pub fn hook_execution(failure: HookFailure) -> Self {
        let message = failure.to_string();
        Self::with_source(ErrorKind::HookExecution, message, failure)
    }

    /// Return the structured hook failure, if this is a hook execution error.
    pub fn hook_failure(&self) -> Option<&HookFailure> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<HookFailure>())
    }

    /// Check whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

/// A hook that ran on its tablet and exited with a failure code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hook '{hook}' failed ({code}): {stderr}")]
pub struct HookFailure {
    /// Name of the hook that failed.
    pub hook: String,
    /// Process exit code reported by the remote agent.
    pub code: i32,
    /// Captured standard error of the hook program.
    pub stderr: String,
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Decode, format!("JSON decode error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
