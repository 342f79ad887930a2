//! Prelude for module authors.

pub use anyhow::{Context as _, Result, bail};

pub use crate::context::{Namespace, resolve};
pub use crate::descriptor::ModuleDescriptor;
pub use crate::module::ConversionModule;
