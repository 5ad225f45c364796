//! Failure signal returned by the `verify_*` assertions.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable code carried by every failure this crate constructs.
pub const PRECONDITION_FAILED: &str = "PRECONDITION_FAILED";

/// Shared handle to a caller supplied error.
///
/// The handle is returned unchanged on failure, so the caller can compare it
/// with [`Arc::ptr_eq`] or downcast it back to its concrete type.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Structured payload of a [`CheckError::Precondition`] failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable message, exactly as surfaced to the caller.
    pub message: String,
    /// Contextual key value pairs (failing check, rendered value).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl ErrorInfo {
    /// Creates a payload with the [`PRECONDITION_FAILED`] code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: PRECONDITION_FAILED.to_owned(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error returned when a precondition does not hold.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    /// Generic precondition failure built by this crate.
    #[error("{0}")]
    Precondition(ErrorInfo),
    /// The caller's own error, handed back untouched.
    #[error(transparent)]
    Cause(SharedError),
}

impl CheckError {
    /// Returns the message the failure displays.
    pub fn message(&self) -> String {
        match self {
            CheckError::Precondition(info) => info.message.clone(),
            CheckError::Cause(cause) => cause.to_string(),
        }
    }

    /// Returns the payload of a generic failure.
    pub fn info(&self) -> Option<&ErrorInfo> {
        match self {
            CheckError::Precondition(info) => Some(info),
            CheckError::Cause(_) => None,
        }
    }

    /// Returns the caller supplied error, if that is what failed.
    pub fn cause(&self) -> Option<&SharedError> {
        match self {
            CheckError::Precondition(_) => None,
            CheckError::Cause(cause) => Some(cause),
        }
    }

    /// Returns `true` when this failure is exactly `other`, by identity.
    pub fn is_cause(&self, other: &SharedError) -> bool {
        self.cause().is_some_and(|cause| Arc::ptr_eq(cause, other))
    }
}

impl From<ErrorInfo> for CheckError {
    fn from(info: ErrorInfo) -> Self {
        CheckError::Precondition(info)
    }
}

/// What to fail with instead of the generic default.
#[derive(Debug, Clone)]
pub enum ErrorOrMsg {
    /// Wrap this text into a new generic failure.
    Message(String),
    /// Return this error as is.
    Cause(SharedError),
}

impl ErrorOrMsg {
    /// Wraps a caller error so it is returned unchanged on failure.
    pub fn cause<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ErrorOrMsg::Cause(Arc::new(error))
    }
}

impl From<&str> for ErrorOrMsg {
    fn from(message: &str) -> Self {
        ErrorOrMsg::Message(message.to_owned())
    }
}

impl From<String> for ErrorOrMsg {
    fn from(message: String) -> Self {
        ErrorOrMsg::Message(message)
    }
}

impl From<SharedError> for ErrorOrMsg {
    fn from(cause: SharedError) -> Self {
        ErrorOrMsg::Cause(cause)
    }
}
