//! Hook request and result types.
//!
//! A [`Hook`] names a program installed on a tablet host. Its outcome comes
//! back as a [`HookResult`] whose exit status is decoded into the closed
//! [`ExitStatus`] enumeration at the wire boundary.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;

/// A request to run a named hook program on a tablet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    /// Name of the hook program. Must be non-empty and contain no `/`.
    pub name: String,
    /// Parameters handed to the hook program unexamined.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl Hook {
    /// Create a hook with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Add a parameter to this hook.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Check that the hook name can be resolved to a program on the remote
    /// host without escaping its hook directory.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("hook name cannot be empty"));
        }
        if self.name.contains('/') {
            return Err(AppError::validation(format!(
                "hook name cannot have a '/' in it: '{}'",
                self.name
            )));
        }
        Ok(())
    }
}

/// Wire value reported when the hook ran successfully.
pub const HOOK_SUCCESS: i64 = 0;

/// Wire value reported when the hook program is not installed on the tablet.
pub const HOOK_DOES_NOT_EXIST: i64 = 1;

/// Outcome of a hook program, as reported by the remote agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ExitStatus {
    /// The hook exited with status 0.
    Success,
    /// The hook program does not exist on the tablet.
    DoesNotExist,
    /// The hook exited with the given non-zero process exit code.
    Failure(i32),
}

impl ExitStatus {
    /// Return the integer carried on the wire for this status.
    pub fn code(&self) -> i64 {
        match self {
            Self::Success => HOOK_SUCCESS,
            Self::DoesNotExist => HOOK_DOES_NOT_EXIST,
            Self::Failure(code) => i64::from(*code),
        }
    }
}

impl TryFrom<i64> for ExitStatus {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            HOOK_SUCCESS => Ok(Self::Success),
            HOOK_DOES_NOT_EXIST => Ok(Self::DoesNotExist),
            code if code > HOOK_DOES_NOT_EXIST => i32::try_from(code)
                .map(Self::Failure)
                .map_err(|_| format!("exit status {code} is out of range")),
            code => Err(format!("unrecognized exit status {code}")),
        }
    }
}

impl From<ExitStatus> for i64 {
    fn from(status: ExitStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::DoesNotExist => write!(f, "does not exist"),
            Self::Failure(code) => write!(f, "failure({code})"),
        }
    }
}

/// The result record written by the remote agent once a hook has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResult {
    /// Exit status of the hook program.
    pub exit_status: ExitStatus,
    /// Captured standard output.
    #[serde(default)]
    pub stdout: String,
    /// Captured standard error.
    #[serde(default)]
    pub stderr: String,
}

impl HookResult {
    /// Decode a result record from its stored JSON bytes.
    pub fn from_slice(data: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(data).map_err(|e| {
            AppError::with_source(ErrorKind::Decode, format!("Malformed hook result: {e}"), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_slash() {
        let err = Hook::new("../bin/sh").validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = Hook::new("").validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_validate_accepts_plain_name() {
        assert!(Hook::new("backup").with_parameter("dir", "/tmp").validate().is_ok());
    }

    #[test]
    fn test_decode_statuses() {
        let ok = HookResult::from_slice(br#"{"exit_status":0,"stdout":"ok","stderr":""}"#).unwrap();
        assert_eq!(ok.exit_status, ExitStatus::Success);
        assert_eq!(ok.stdout, "ok");

        let missing = HookResult::from_slice(br#"{"exit_status":1}"#).unwrap();
        assert_eq!(missing.exit_status, ExitStatus::DoesNotExist);
        assert_eq!(missing.stderr, "");

        let failed = HookResult::from_slice(br#"{"exit_status":17,"stderr":"boom"}"#).unwrap();
        assert_eq!(failed.exit_status, ExitStatus::Failure(17));
    }

    #[test]
    fn test_decode_rejects_negative_status() {
        let err = HookResult::from_slice(br#"{"exit_status":-2}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = HookResult::from_slice(b"not json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
    }

    #[test]
    fn test_encodes_status_as_integer() {
        let result = HookResult {
            exit_status: ExitStatus::Failure(3),
            stdout: String::new(),
            stderr: "bad".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["exit_status"], 3);
    }
}
