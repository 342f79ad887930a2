//! Execution-context isolation.
//!
//! Every thread has an *active namespace* that symbol resolution runs
//! against. By default it is the host namespace. While a module is being
//! invoked, the module's own namespace is installed instead, so names
//! resolved from module code never hit the host's (or another module's)
//! symbols.
//!
//! Installation is scoped: [`enter`] returns a [`ContextGuard`] whose `Drop`
//! puts the previous namespace back. Drop runs on normal return, early
//! return via `?`, and during panic unwinding alike.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, LazyLock};

/// Name of the process-wide default namespace.
pub const HOST_NAMESPACE: &str = "host";

type Symbol = Arc<dyn Any + Send + Sync>;

static HOST: LazyLock<Arc<Namespace>> = LazyLock::new(|| Arc::new(Namespace::new(HOST_NAMESPACE)));

thread_local! {
    /// `None` means the host namespace is active.
    static ACTIVE: RefCell<Option<Arc<Namespace>>> = const { RefCell::new(None) };
}

/// A named table of symbols owned by one module (or by the host).
pub struct Namespace {
    name: String,
    symbols: HashMap<String, Symbol>,
}

impl Namespace {
    /// Creates an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: HashMap::new(),
        }
    }

    /// Returns the shared host namespace.
    pub fn host() -> Arc<Namespace> {
        Arc::clone(&HOST)
    }

    /// Adds a symbol, replacing any previous value under the same name.
    pub fn with_symbol<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.symbols.insert(name.into(), Arc::new(value));
        self
    }

    /// Namespace name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a symbol in this namespace only.
    ///
    /// Returns `None` if the name is unknown or bound to a different type.
    pub fn lookup<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.symbols
            .get(name)
            .cloned()
            .and_then(|symbol| symbol.downcast::<T>().ok())
    }

    /// Returns whether a symbol with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<&str> = self.symbols.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        f.debug_struct("Namespace")
            .field("name", &self.name)
            .field("symbols", &symbols)
            .finish()
    }
}

/// Returns the namespace active on the calling thread.
pub fn current() -> Arc<Namespace> {
    ACTIVE
        .with(|active| active.borrow().clone())
        .unwrap_or_else(Namespace::host)
}

/// Returns whether `namespace` is the one active on the calling thread.
pub fn is_active(namespace: &Arc<Namespace>) -> bool {
    Arc::ptr_eq(&current(), namespace)
}

/// Resolves a symbol against the active namespace.
pub fn resolve<T>(name: &str) -> Option<Arc<T>>
where
    T: Any + Send + Sync,
{
    current().lookup(name)
}

/// Restores the previously active namespace when dropped.
///
/// The guard is `!Send`: it must be dropped on the thread that created it.
#[must_use = "the namespace is restored as soon as the guard is dropped"]
pub struct ContextGuard {
    previous: Option<Arc<Namespace>>,
    _not_send: PhantomData<*const ()>,
}

impl fmt::Debug for ContextGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextGuard")
            .field(
                "previous",
                &self.previous.as_ref().map(|ns| ns.name()).unwrap_or(HOST_NAMESPACE),
            )
            .finish()
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        // try_with: the thread-local may already be gone during thread teardown.
        let _ = ACTIVE.try_with(move |active| *active.borrow_mut() = previous);
    }
}

/// Installs `namespace` as the calling thread's active namespace.
pub fn enter(namespace: Arc<Namespace>) -> ContextGuard {
    let previous = ACTIVE.with(|active| active.replace(Some(namespace)));
    ContextGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Runs `body` with `namespace` active, restoring the previous namespace on
/// every exit path, including a panic raised inside `body`.
pub fn with_isolated_context<T>(namespace: &Arc<Namespace>, body: impl FnOnce() -> T) -> T {
    let _guard = enter(Arc::clone(namespace));
    body()
}
