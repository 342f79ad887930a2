//! Faults raised while running a conversion module.

use thiserror::Error;

use crate::outcome::FailureKind;

/// A module failed to produce output.
///
/// `panicked` records whether the fault was a contained panic rather than
/// a returned error; it only affects logging.
#[derive(Debug, Clone, Error)]
pub enum ModuleFault {
    /// The module instance could not be created.
    #[error("module '{module}' could not be instantiated: {reason}")]
    Instantiation {
        /// Format type key of the module.
        module: String,
        /// Error or panic message.
        reason: String,
        /// Whether the fault was a panic.
        panicked: bool,
    },

    /// The conversion entry point could not be found or failed while running.
    #[error("module '{module}' failed during conversion: {reason}")]
    Invocation {
        /// Format type key of the module.
        module: String,
        /// Error or panic message.
        reason: String,
        /// Whether the fault was a panic.
        panicked: bool,
    },
}

impl ModuleFault {
    /// The outcome failure kind this fault maps to.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Instantiation { .. } => FailureKind::InstantiationFailed,
            Self::Invocation { .. } => FailureKind::InvocationFailed,
        }
    }

    /// Whether the fault was a contained panic.
    pub fn panicked(&self) -> bool {
        match self {
            Self::Instantiation { panicked, .. } | Self::Invocation { panicked, .. } => *panicked,
        }
    }
}
