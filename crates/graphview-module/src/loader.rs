//! Shared-library module loader using `libloading` (feature-gated).

#[cfg(feature = "dynamic")]
pub mod dynamic_loader {
    use std::ffi::{CStr, CString};
    use std::os::raw::c_void;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use anyhow::{Context, bail};
    use libloading::{Library, Symbol};
    use tracing::{info, warn};

    use graphview_core::error::AppError;

    use crate::context::Namespace;
    use crate::descriptor::ModuleDescriptor;
    use crate::ffi::abi::{
        CONVERT_SYMBOL, DROP_SYMBOL, FREE_STRING_SYMBOL, KEY_SYMBOL, ModuleConvertFn,
        ModuleDropFn, ModuleFreeStringFn, ModuleNewFn, ModuleStringFn, NAME_SYMBOL, NEW_SYMBOL,
    };
    use crate::ffi::safety::c_str_to_string;
    use crate::module::{ConversionModule, ModuleFactory};

    /// Namespace symbol holding the path the module was loaded from.
    pub const LIBRARY_PATH_SYMBOL: &str = "module.library_path";

    /// Loads conversion modules from shared libraries (.so / .dll / .dylib).
    ///
    /// Each library stays loaded for as long as its descriptor (or any
    /// instance created from it) is alive.
    #[derive(Debug, Default)]
    pub struct DynamicLoader;

    impl DynamicLoader {
        /// Creates a new dynamic loader.
        pub fn new() -> Self {
            Self
        }

        /// Loads every module library found directly in `dir`, in file name
        /// order. Libraries that fail to load are skipped with a warning.
        pub fn load_directory(&self, dir: &Path) -> Result<Vec<ModuleDescriptor>, AppError> {
            if !dir.is_dir() {
                warn!(directory = %dir.display(), "Module directory does not exist, skipping");
                return Ok(Vec::new());
            }

            let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| is_module_library(path))
                .collect();
            paths.sort();

            let mut descriptors = Vec::with_capacity(paths.len());
            for path in paths {
                // SAFETY: the module directory is operator-controlled; only
                // trusted libraries are expected there.
                match unsafe { self.load_from_path(&path) } {
                    Ok(descriptor) => descriptors.push(descriptor),
                    Err(e) => warn!(path = %path.display(), error = %e, "Skipping module library"),
                }
            }

            Ok(descriptors)
        }

        /// Loads one module from the given shared library path.
        ///
        /// # Safety
        /// This loads arbitrary code from a shared library and runs its
        /// initializers. Only load trusted modules.
        pub unsafe fn load_from_path(&self, path: &Path) -> Result<ModuleDescriptor, AppError> {
            let library = unsafe { Library::new(path) }.map_err(|e| {
                AppError::module(format!(
                    "Failed to load module library '{}': {e}",
                    path.display()
                ))
            })?;

            let key = unsafe { read_static_str(&library, KEY_SYMBOL) }.ok_or_else(|| {
                AppError::module(format!(
                    "Module '{}' does not export a valid key",
                    path.display()
                ))
            })?;
            let name = unsafe { read_static_str(&library, NAME_SYMBOL) }
                .unwrap_or_else(|| key.clone());

            info!(path = %path.display(), module_key = %key, "Dynamic module loaded");

            let namespace = Namespace::new(format!("dynamic:{key}"))
                .with_symbol(LIBRARY_PATH_SYMBOL, path.to_path_buf());
            let factory = DynamicFactory {
                library: Arc::new(library),
            };

            Ok(ModuleDescriptor::new(key, name, factory).with_namespace(namespace))
        }
    }

    fn is_module_library(path: &Path) -> bool {
        path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(std::env::consts::DLL_EXTENSION)
    }

    unsafe fn read_static_str(library: &Library, symbol: &[u8]) -> Option<String> {
        let function: Symbol<ModuleStringFn> = unsafe { library.get(symbol) }.ok()?;
        unsafe { c_str_to_string(function()) }
    }

    /// Creates instances through the library's constructor export.
    struct DynamicFactory {
        library: Arc<Library>,
    }

    impl ModuleFactory for DynamicFactory {
        fn new_instance(&self) -> anyhow::Result<Box<dyn ConversionModule>> {
            let create: Symbol<ModuleNewFn> =
                unsafe { self.library.get(NEW_SYMBOL) }.context("constructor not exported")?;
            let handle = unsafe { create() };
            if handle.is_null() {
                bail!("constructor returned a null instance");
            }
            Ok(Box::new(DynamicInstance {
                library: Arc::clone(&self.library),
                handle,
            }))
        }
    }

    /// One instance living inside the library.
    struct DynamicInstance {
        library: Arc<Library>,
        handle: *mut c_void,
    }

    impl ConversionModule for DynamicInstance {
        fn convert(&mut self, input: &str) -> anyhow::Result<String> {
            let convert: Symbol<ModuleConvertFn> = unsafe { self.library.get(CONVERT_SYMBOL) }
                .context("conversion entry point not exported")?;
            let free: Symbol<ModuleFreeStringFn> = unsafe { self.library.get(FREE_STRING_SYMBOL) }
                .context("output deallocator not exported")?;

            let input = CString::new(input).context("input contains a NUL byte")?;
            let output = unsafe { convert(self.handle, input.as_ptr()) };
            if output.is_null() {
                bail!("conversion returned no output");
            }

            let converted = unsafe { CStr::from_ptr(output) }
                .to_str()
                .map(str::to_owned);
            unsafe { free(output) };

            converted.context("output is not valid UTF-8")
        }
    }

    impl Drop for DynamicInstance {
        fn drop(&mut self) {
            match unsafe { self.library.get::<ModuleDropFn>(DROP_SYMBOL) } {
                Ok(destroy) => unsafe { destroy(self.handle) },
                Err(e) => warn!(error = %e, "Module does not export a destructor, leaking instance"),
            }
        }
    }
}

/// Stub loader when dynamic feature is not enabled.
#[cfg(not(feature = "dynamic"))]
pub mod dynamic_loader {
    use std::path::Path;

    use tracing::debug;

    use graphview_core::error::AppError;

    use crate::descriptor::ModuleDescriptor;

    /// Stub dynamic loader.
    #[derive(Debug, Default)]
    pub struct DynamicLoader;

    impl DynamicLoader {
        /// Creates a stub loader.
        pub fn new() -> Self {
            Self
        }

        /// Loads nothing: shared-library support is compiled out.
        pub fn load_directory(&self, dir: &Path) -> Result<Vec<ModuleDescriptor>, AppError> {
            debug!(
                directory = %dir.display(),
                "Built without the `dynamic` feature, not scanning for module libraries"
            );
            Ok(Vec::new())
        }
    }
}

pub use dynamic_loader::DynamicLoader;

#[cfg(all(test, not(feature = "dynamic")))]
mod tests {
    use super::*;

    #[test]
    fn test_stub_loads_nothing() {
        let loaded = DynamicLoader::new()
            .load_directory(std::path::Path::new("."))
            .unwrap();
        assert!(loaded.is_empty());
    }
}

#[cfg(all(test, feature = "dynamic"))]
mod tests {
    use std::path::Path;

    use super::*;

    fn library_name(stem: &str) -> String {
        format!("{stem}.{}", std::env::consts::DLL_EXTENSION)
    }

    #[test]
    fn test_missing_directory_loads_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent");

        let loaded = DynamicLoader::new().load_directory(&missing).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_non_library_files_are_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("notes.txt"), "not a module").expect("write");
        std::fs::create_dir(dir.path().join(library_name("nested"))).expect("mkdir");

        let loaded = DynamicLoader::new().load_directory(dir.path()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_invalid_library_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(library_name("garbage")), b"\x00\x01 not elf").expect("write");

        let loaded = DynamicLoader::new().load_directory(dir.path()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_from_path_reports_invalid_library() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(library_name("garbage"));
        std::fs::write(&path, b"garbage").expect("write");

        let err = unsafe { DynamicLoader::new().load_from_path(Path::new(&path)) }.unwrap_err();
        assert_eq!(err.kind, graphview_core::error::ErrorKind::Module);
    }
}
