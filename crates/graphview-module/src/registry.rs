//! Module registry: maps format type keys to module descriptors.
//!
//! Built once at startup through [`ModuleRegistryBuilder`] and read-only
//! afterwards, so lookups need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

pub use crate::descriptor::ModuleSummary;
use crate::descriptor::ModuleDescriptor;

/// Read contract the dispatcher uses against a registry.
pub trait ModuleLookup: Send + Sync {
    /// Finds the module registered for `key`.
    fn lookup(&self, key: &str) -> Option<Arc<ModuleDescriptor>>;
}

/// Immutable registry of conversion modules.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    /// Format type key → descriptor.
    modules: HashMap<String, Arc<ModuleDescriptor>>,
}

impl ModuleRegistry {
    /// Starts building a registry.
    pub fn builder() -> ModuleRegistryBuilder {
        ModuleRegistryBuilder::default()
    }

    /// Returns the number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns whether no module is registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Checks whether a key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.modules.contains_key(key)
    }

    /// Lists registered modules sorted by key.
    pub fn summaries(&self) -> Vec<ModuleSummary> {
        let mut summaries: Vec<ModuleSummary> =
            self.modules.values().map(|d| d.summary()).collect();
        summaries.sort_by(|a, b| a.key.cmp(&b.key));
        summaries
    }
}

impl ModuleLookup for ModuleRegistry {
    fn lookup(&self, key: &str) -> Option<Arc<ModuleDescriptor>> {
        self.modules.get(key).cloned()
    }
}

/// Accumulates descriptors before freezing them into a [`ModuleRegistry`].
#[derive(Debug, Default)]
pub struct ModuleRegistryBuilder {
    modules: HashMap<String, Arc<ModuleDescriptor>>,
}

impl ModuleRegistryBuilder {
    /// Registers a module. A later registration for the same key replaces
    /// the earlier one.
    pub fn register(&mut self, descriptor: ModuleDescriptor) -> &mut Self {
        let key = descriptor.key().to_string();
        let name = descriptor.display_name().to_string();

        if let Some(replaced) = self.modules.insert(key.clone(), Arc::new(descriptor)) {
            warn!(
                module_key = %key,
                replaced = %replaced.display_name(),
                module_name = %name,
                "Duplicate module key, keeping the last registration"
            );
        } else {
            info!(module_key = %key, module_name = %name, "Registering conversion module");
        }

        self
    }

    /// Registers every descriptor in order.
    pub fn register_all(&mut self, descriptors: impl IntoIterator<Item = ModuleDescriptor>) -> &mut Self {
        for descriptor in descriptors {
            self.register(descriptor);
        }
        self
    }

    /// Freezes the registry.
    pub fn build(self) -> ModuleRegistry {
        info!(modules = self.modules.len(), "Module registry built");
        ModuleRegistry {
            modules: self.modules,
        }
    }
}
