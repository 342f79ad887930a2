//! Converter dispatcher: turns a format type and diagram text into a
//! [`ConversionOutcome`].
//!
//! - `raw` is returned as-is without touching the registry.
//! - Unknown keys yield `NotRegistered`.
//! - Known keys are invoked once, in isolation; every fault is absorbed,
//!   logged with the module's identity, and reported as a failure kind.
//! - Blank module output yields `EmptyResult`.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::invoke::invoke_isolated;
use crate::outcome::{ConversionOutcome, FailureKind};
use crate::registry::ModuleLookup;

/// Format type of diagrams already in canonical graph JSON.
pub const RAW_FORMAT: &str = "raw";

/// Resolves and runs conversion modules.
#[derive(Clone)]
pub struct ConverterDispatcher {
    registry: Arc<dyn ModuleLookup>,
}

impl ConverterDispatcher {
    /// Creates a dispatcher reading from `registry`.
    pub fn new(registry: Arc<dyn ModuleLookup>) -> Self {
        Self { registry }
    }

    /// Converts `content` declared as `format_type` into canonical JSON.
    ///
    /// `content` is expected to be non-empty. Exactly one invocation is
    /// attempted; this never panics because of module code.
    pub fn dispatch(&self, format_type: &str, content: &str) -> ConversionOutcome {
        if format_type == RAW_FORMAT {
            debug!("Diagram already in raw format");
            return ConversionOutcome::Success {
                json: content.to_string(),
            };
        }

        let Some(descriptor) = self.registry.lookup(format_type) else {
            debug!(format_type = %format_type, "No conversion module registered");
            return FailureKind::NotRegistered.into();
        };

        debug!(
            module_key = %descriptor.key(),
            module_name = %descriptor.display_name(),
            "Converting diagram with module"
        );

        match invoke_isolated(&descriptor, content) {
            Ok(output) => {
                let outcome = ConversionOutcome::from_output(output);
                if !outcome.is_success() {
                    warn!(
                        module_key = %descriptor.key(),
                        module_name = %descriptor.display_name(),
                        "Conversion module returned an empty result"
                    );
                }
                outcome
            }
            Err(fault) => {
                error!(
                    module_key = %descriptor.key(),
                    module_name = %descriptor.display_name(),
                    panicked = fault.panicked(),
                    error = %fault,
                    "Conversion module failed"
                );
                fault.failure_kind().into()
            }
        }
    }
}

impl fmt::Debug for ConverterDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterDispatcher").finish_non_exhaustive()
    }
}
