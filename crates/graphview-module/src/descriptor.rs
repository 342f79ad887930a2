//! Module descriptors: what the registry stores per format type.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::context::Namespace;
use crate::module::{ConversionModule, DefaultFactory, ModuleFactory};

/// Identifies one executable conversion unit. Immutable once built.
#[derive(Clone)]
pub struct ModuleDescriptor {
    key: String,
    display_name: String,
    namespace: Arc<Namespace>,
    factory: Arc<dyn ModuleFactory>,
}

impl ModuleDescriptor {
    /// Creates a descriptor with an empty namespace named after `key`.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        factory: impl ModuleFactory + 'static,
    ) -> Self {
        let key = key.into();
        Self {
            namespace: Arc::new(Namespace::new(key.clone())),
            key,
            display_name: display_name.into(),
            factory: Arc::new(factory),
        }
    }

    /// Creates a descriptor for a module type constructed with `Default`.
    pub fn of<M>(key: impl Into<String>, display_name: impl Into<String>) -> Self
    where
        M: ConversionModule + Default + 'static,
    {
        Self::new(key, display_name, DefaultFactory::<M>::new())
    }

    /// Replaces the module's namespace.
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Arc::new(namespace);
        self
    }

    /// Format type key this module is registered under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable module name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The module's own symbol namespace.
    pub fn namespace(&self) -> &Arc<Namespace> {
        &self.namespace
    }

    /// The instance factory.
    pub fn factory(&self) -> &dyn ModuleFactory {
        self.factory.as_ref()
    }

    /// Key and display name, for listings.
    pub fn summary(&self) -> ModuleSummary {
        ModuleSummary {
            key: self.key.clone(),
            name: self.display_name.clone(),
        }
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("key", &self.key)
            .field("display_name", &self.display_name)
            .field("namespace", &self.namespace.name())
            .finish_non_exhaustive()
    }
}

/// Public view of a registered module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    /// Format type key.
    pub key: String,
    /// Display name.
    pub name: String,
}
