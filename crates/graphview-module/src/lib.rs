//! # graphview-module
//!
//! Conversion module framework for GraphView. Provides:
//!
//! - The `ConversionModule` capability and per-call `ModuleFactory`
//! - A read-only `ModuleRegistry` keyed by format type
//! - Thread-local execution-context isolation (`context`)
//! - The `ConverterDispatcher`, which never lets a module fault escape
//! - Optional shared-library loading via `libloading` (feature `dynamic`)

pub mod context;
pub mod descriptor;
pub mod dispatcher;
pub mod error;
pub mod ffi;
pub mod invoke;
pub mod loader;
pub mod module;
pub mod outcome;
pub mod prelude;
pub mod registry;

pub use context::{ContextGuard, Namespace, with_isolated_context};
pub use descriptor::ModuleDescriptor;
pub use dispatcher::{ConverterDispatcher, RAW_FORMAT};
pub use error::ModuleFault;
pub use loader::DynamicLoader;
pub use module::{ConversionModule, ModuleFactory};
pub use outcome::{ConversionOutcome, FailureKind};
pub use registry::{ModuleLookup, ModuleRegistry, ModuleRegistryBuilder, ModuleSummary};
