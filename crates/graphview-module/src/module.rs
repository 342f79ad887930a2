//! The conversion capability and its per-call factory.

use std::marker::PhantomData;

/// A unit translating one source-specific diagram format into canonical
/// graph JSON.
///
/// Instances are created fresh for every invocation and dropped right after,
/// so implementations must not rely on state surviving between calls. All
/// work must happen synchronously on the calling thread: the isolated
/// namespace is installed only for that thread.
pub trait ConversionModule {
    /// Converts diagram text into canonical graph JSON.
    fn convert(&mut self, input: &str) -> anyhow::Result<String>;
}

/// Creates module instances. Held by a [`ModuleDescriptor`](crate::ModuleDescriptor)
/// for the lifetime of the process.
pub trait ModuleFactory: Send + Sync {
    /// Builds a new, independent module instance.
    fn new_instance(&self) -> anyhow::Result<Box<dyn ConversionModule>>;
}

impl<F> ModuleFactory for F
where
    F: Fn() -> anyhow::Result<Box<dyn ConversionModule>> + Send + Sync,
{
    fn new_instance(&self) -> anyhow::Result<Box<dyn ConversionModule>> {
        self()
    }
}

/// Factory for modules with no-argument construction.
pub struct DefaultFactory<M> {
    _module: PhantomData<fn() -> M>,
}

impl<M> DefaultFactory<M> {
    /// Creates the factory.
    pub fn new() -> Self {
        Self {
            _module: PhantomData,
        }
    }
}

impl<M> Default for DefaultFactory<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ModuleFactory for DefaultFactory<M>
where
    M: ConversionModule + Default + 'static,
{
    fn new_instance(&self) -> anyhow::Result<Box<dyn ConversionModule>> {
        Ok(Box::new(M::default()))
    }
}
