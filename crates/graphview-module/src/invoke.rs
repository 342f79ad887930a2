//! Runs one module invocation inside the module's own namespace.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::context;
use crate::descriptor::ModuleDescriptor;
use crate::error::ModuleFault;

/// Error or panic captured from module code.
struct Contained {
    reason: String,
    panicked: bool,
}

/// Instantiates the module and runs its conversion entry point on `input`,
/// with the module's namespace active for the whole call.
///
/// Instantiation faults and conversion faults are reported as distinct
/// [`ModuleFault`] variants. Panics are caught and reported the same way.
/// The instance is dropped before the namespace is restored.
pub fn invoke_isolated(descriptor: &ModuleDescriptor, input: &str) -> Result<String, ModuleFault> {
    context::with_isolated_context(descriptor.namespace(), || {
        let instance = contain(|| descriptor.factory().new_instance()).map_err(|failure| {
            ModuleFault::Instantiation {
                module: descriptor.key().to_string(),
                reason: failure.reason,
                panicked: failure.panicked,
            }
        })?;

        contain(move || {
            let mut instance = instance;
            instance.convert(input)
        })
        .map_err(|failure| ModuleFault::Invocation {
            module: descriptor.key().to_string(),
            reason: failure.reason,
            panicked: failure.panicked,
        })
    })
}

fn contain<T>(f: impl FnOnce() -> anyhow::Result<T>) -> Result<T, Contained> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(Contained {
            reason: format!("{err:#}"),
            panicked: false,
        }),
        Err(payload) => Err(Contained {
            reason: panic_message(payload.as_ref()),
            panicked: true,
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
