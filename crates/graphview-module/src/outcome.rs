//! Normalized conversion results.

use std::fmt;

/// Why a conversion produced no usable JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// No module is registered for the format type.
    NotRegistered,
    /// The module instance could not be created.
    InstantiationFailed,
    /// The module's entry point was missing or failed.
    InvocationFailed,
    /// The module returned an empty or all-whitespace string.
    EmptyResult,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered => write!(f, "not_registered"),
            Self::InstantiationFailed => write!(f, "instantiation_failed"),
            Self::InvocationFailed => write!(f, "invocation_failed"),
            Self::EmptyResult => write!(f, "empty_result"),
        }
    }
}

/// Result of one dispatch: either JSON or a failure kind, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Conversion produced non-blank JSON.
    Success {
        /// Canonical graph JSON.
        json: String,
    },
    /// Conversion failed.
    Failure {
        /// Failure category.
        kind: FailureKind,
    },
}

impl ConversionOutcome {
    /// Classifies raw module output: blank output becomes `EmptyResult`.
    pub fn from_output(output: String) -> Self {
        if output.trim().is_empty() {
            Self::Failure {
                kind: FailureKind::EmptyResult,
            }
        } else {
            Self::Success { json: output }
        }
    }

    /// Returns whether this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the failure kind, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind } => Some(*kind),
        }
    }

    /// Consumes the outcome, returning the JSON on success.
    pub fn into_json(self) -> Option<String> {
        match self {
            Self::Success { json } => Some(json),
            Self::Failure { .. } => None,
        }
    }
}

impl From<FailureKind> for ConversionOutcome {
    fn from(kind: FailureKind) -> Self {
        Self::Failure { kind }
    }
}
